//! Matrix arithmetic
//!
//! Every operation checks operand shapes before touching any entry, reads
//! both operands through shared references and returns a fresh matrix.

mod elementwise;
mod multiply;

use core::str::FromStr;

use crate::config::MultiplyStrategy;
use crate::error::{MatrixError, Result};
use crate::matrix::{Shape, SparseMatrix};
use crate::traits::MatrixElement;

/// Binary matrix operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations in code order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Numeric menu code: 1 = add, 2 = subtract, 3 = multiply
    pub const fn code(self) -> u8 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
        }
    }

    /// Convert from numeric menu code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Operation::Add),
            2 => Some(Operation::Subtract),
            3 => Some(Operation::Multiply),
            _ => None,
        }
    }

    /// Noun form, e.g. "addition"
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        }
    }

    /// Verb form, e.g. "add"
    pub const fn verb(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Shape of the result, or `DimensionMismatch` if the operands do not fit
    ///
    /// Add and subtract need identical shapes; multiply needs
    /// `lhs.cols == rhs.rows` and yields `lhs.rows x rhs.cols`.
    pub fn result_shape(self, lhs: Shape, rhs: Shape) -> Result<Shape> {
        let compatible = match self {
            Operation::Add | Operation::Subtract => lhs == rhs,
            Operation::Multiply => lhs.cols == rhs.rows,
        };
        if !compatible {
            return Err(MatrixError::DimensionMismatch {
                operation: self,
                lhs,
                rhs,
            });
        }
        Ok(match self {
            Operation::Add | Operation::Subtract => lhs,
            Operation::Multiply => Shape::new(lhs.rows, rhs.cols),
        })
    }

    /// Apply the operation to two matrices
    ///
    /// `strategy` only affects [`Operation::Multiply`].
    pub fn apply<T: MatrixElement>(
        self,
        lhs: &SparseMatrix<T>,
        rhs: &SparseMatrix<T>,
        strategy: MultiplyStrategy,
    ) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.subtract(rhs),
            Operation::Multiply => lhs.multiply_with(rhs, strategy),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an operation name or code is not recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOperation;

impl core::fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "unknown operation, expected 1/add, 2/subtract or 3/multiply"
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownOperation {}

/// Accepts menu codes (`1`, `2`, `3`), verbs (`add`, `sub`, `mul`, ...) and
/// nouns (`addition`, ...), case-insensitively.
impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Operation::from_code(code).ok_or(UnknownOperation);
        }

        let aliases: [(&str, Operation); 6] = [
            ("sub", Operation::Subtract),
            ("mul", Operation::Multiply),
            ("plus", Operation::Add),
            ("minus", Operation::Subtract),
            ("times", Operation::Multiply),
            ("product", Operation::Multiply),
        ];
        Operation::ALL
            .iter()
            .flat_map(|&op| [(op.verb(), op), (op.name(), op)])
            .chain(aliases)
            .find(|(alias, _)| alias.eq_ignore_ascii_case(s))
            .map(|(_, op)| op)
            .ok_or(UnknownOperation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_code(op.code()), Some(op));
        }
        assert_eq!(Operation::from_code(0), None);
        assert_eq!(Operation::from_code(4), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1".parse(), Ok(Operation::Add));
        assert_eq!(" 2 ".parse(), Ok(Operation::Subtract));
        assert_eq!("3".parse(), Ok(Operation::Multiply));
        assert_eq!("add".parse(), Ok(Operation::Add));
        assert_eq!("Subtraction".parse(), Ok(Operation::Subtract));
        assert_eq!("MUL".parse(), Ok(Operation::Multiply));

        assert_eq!("4".parse::<Operation>(), Err(UnknownOperation));
        assert_eq!("divide".parse::<Operation>(), Err(UnknownOperation));
        assert_eq!("".parse::<Operation>(), Err(UnknownOperation));
    }

    #[test]
    fn test_result_shape() {
        let a = Shape::new(2, 3);
        let b = Shape::new(3, 4);

        assert_eq!(Operation::Add.result_shape(a, a), Ok(a));
        assert_eq!(Operation::Subtract.result_shape(b, b), Ok(b));
        assert_eq!(
            Operation::Multiply.result_shape(a, b),
            Ok(Shape::new(2, 4))
        );

        assert_eq!(
            Operation::Add.result_shape(a, b),
            Err(MatrixError::DimensionMismatch {
                operation: Operation::Add,
                lhs: a,
                rhs: b
            })
        );
        assert_eq!(
            Operation::Multiply.result_shape(b, a),
            Err(MatrixError::DimensionMismatch {
                operation: Operation::Multiply,
                lhs: b,
                rhs: a
            })
        );
    }
}
