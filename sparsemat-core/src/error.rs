//! Error types for sparse matrix operations

use crate::matrix::Shape;
use crate::ops::Operation;

/// Header field named in a format error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Rows,
    Cols,
}

impl HeaderField {
    /// Key as it appears in the text header
    pub const fn key(self) -> &'static str {
        match self {
            HeaderField::Rows => crate::format::constants::ROWS_KEY,
            HeaderField::Cols => crate::format::constants::COLS_KEY,
        }
    }
}

/// What went wrong on a malformed line of matrix text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Source ended before the header line was read
    MissingHeader(HeaderField),
    /// Header line is not `<key>=<integer>`
    InvalidHeader(HeaderField),
    /// Header declares a zero dimension
    ZeroDimension(HeaderField),
    /// Entry line is not wrapped in parentheses or has the wrong token count
    MalformedEntry,
    /// Row or column token is not a non-negative integer
    InvalidCoordinate,
    /// Value token is not an integer of the element type
    InvalidValue,
    /// Coordinate lies outside the declared dimensions
    CoordinateOutOfBounds,
    /// Coordinate already appeared earlier in the source
    DuplicateEntry,
}

impl core::fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatErrorKind::MissingHeader(field) => {
                write!(f, "missing `{}=` header line", field.key())
            }
            FormatErrorKind::InvalidHeader(field) => {
                write!(f, "expected `{}=<integer>`", field.key())
            }
            FormatErrorKind::ZeroDimension(field) => {
                write!(f, "`{}` must be a positive integer", field.key())
            }
            FormatErrorKind::MalformedEntry => write!(f, "expected `(row, col, value)`"),
            FormatErrorKind::InvalidCoordinate => write!(f, "invalid row or column index"),
            FormatErrorKind::InvalidValue => write!(f, "invalid integer value"),
            FormatErrorKind::CoordinateOutOfBounds => write!(f, "coordinate out of bounds"),
            FormatErrorKind::DuplicateEntry => write!(f, "duplicate coordinate"),
        }
    }
}

/// Broad classification of a [`MatrixError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed text input
    Format,
    /// Operand shapes incompatible or invalid
    Dimension,
    /// Integer overflow while computing a result
    Arithmetic,
    /// Write outside declared dimensions
    Bounds,
}

/// Errors that can occur during sparse matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Malformed header or entry line (1-based line number)
    Format { line: usize, kind: FormatErrorKind },
    /// Operand shapes incompatible with the requested operation
    DimensionMismatch {
        operation: Operation,
        lhs: Shape,
        rhs: Shape,
    },
    /// Matrix dimensions must both be positive
    InvalidDimensions { rows: usize, cols: usize },
    /// Write to a coordinate outside the matrix
    IndexOutOfBounds { row: usize, col: usize, shape: Shape },
    /// Result value does not fit the element type
    Overflow {
        operation: Operation,
        row: usize,
        col: usize,
    },
}

impl MatrixError {
    pub(crate) const fn format(line: usize, kind: FormatErrorKind) -> Self {
        MatrixError::Format { line, kind }
    }

    /// Classify the error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::Format { .. } => ErrorCategory::Format,
            MatrixError::DimensionMismatch { .. } | MatrixError::InvalidDimensions { .. } => {
                ErrorCategory::Dimension
            }
            MatrixError::IndexOutOfBounds { .. } => ErrorCategory::Bounds,
            MatrixError::Overflow { .. } => ErrorCategory::Arithmetic,
        }
    }

    /// True for malformed-input errors
    pub const fn is_format(&self) -> bool {
        matches!(self, MatrixError::Format { .. })
    }

    /// True for incompatible-operand errors
    pub const fn is_dimension_mismatch(&self) -> bool {
        matches!(self, MatrixError::DimensionMismatch { .. })
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::Format { line, kind } => {
                write!(f, "wrong format on line {line}: {kind}")
            }
            MatrixError::DimensionMismatch {
                operation,
                lhs,
                rhs,
            } => write!(
                f,
                "cannot {} a {lhs} matrix and a {rhs} matrix",
                operation.verb()
            ),
            MatrixError::InvalidDimensions { rows, cols } => {
                write!(f, "matrix dimensions must be positive, got {rows}x{cols}")
            }
            MatrixError::IndexOutOfBounds { row, col, shape } => {
                write!(f, "coordinate ({row}, {col}) outside {shape} matrix")
            }
            MatrixError::Overflow {
                operation,
                row,
                col,
            } => write!(
                f,
                "integer overflow at ({row}, {col}) while trying to {}",
                operation.verb()
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_category() {
        let shape = Shape::new(2, 2);
        assert_eq!(
            MatrixError::format(3, FormatErrorKind::InvalidValue).category(),
            ErrorCategory::Format
        );
        assert_eq!(
            MatrixError::DimensionMismatch {
                operation: Operation::Add,
                lhs: shape,
                rhs: Shape::new(2, 3),
            }
            .category(),
            ErrorCategory::Dimension
        );
        assert_eq!(
            MatrixError::IndexOutOfBounds {
                row: 5,
                col: 0,
                shape
            }
            .category(),
            ErrorCategory::Bounds
        );
        assert_eq!(
            MatrixError::Overflow {
                operation: Operation::Multiply,
                row: 0,
                col: 0
            }
            .category(),
            ErrorCategory::Arithmetic
        );
    }

    #[test]
    fn test_display() {
        let err = MatrixError::format(3, FormatErrorKind::InvalidValue);
        assert_eq!(
            err.to_string(),
            "wrong format on line 3: invalid integer value"
        );

        let err = MatrixError::format(1, FormatErrorKind::InvalidHeader(HeaderField::Rows));
        assert_eq!(
            err.to_string(),
            "wrong format on line 1: expected `rows=<integer>`"
        );

        let err = MatrixError::DimensionMismatch {
            operation: Operation::Multiply,
            lhs: Shape::new(2, 3),
            rhs: Shape::new(2, 3),
        };
        assert_eq!(
            err.to_string(),
            "cannot multiply a 2x3 matrix and a 2x3 matrix"
        );
    }
}
