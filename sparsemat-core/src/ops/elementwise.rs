//! Elementwise addition and subtraction
//!
//! Only coordinates stored in at least one operand are visited, so the cost
//! is `O(nnz(lhs) + nnz(rhs))` regardless of the matrix dimensions.

use super::Operation;
use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;

impl<T: MatrixElement> SparseMatrix<T> {
    /// Elementwise sum
    ///
    /// Fails with `DimensionMismatch` unless both matrices have the same shape.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, Operation::Add, T::checked_add)
    }

    /// Elementwise difference `self - other`
    ///
    /// Fails with `DimensionMismatch` unless both matrices have the same shape.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.combine(other, Operation::Subtract, T::checked_sub)
    }

    fn combine<F>(&self, other: &Self, operation: Operation, op: F) -> Result<Self>
    where
        F: Fn(T, T) -> Option<T>,
    {
        let shape = operation.result_shape(self.shape(), other.shape())?;
        let mut result = Self::with_shape(shape);

        // Union of both key sets, each coordinate once
        let only_other = other.coords().filter(|c| !self.contains(c.row, c.col));
        for coord in self.coords().chain(only_other) {
            let value = op(self.get(coord.row, coord.col), other.get(coord.row, coord.col))
                .ok_or(MatrixError::Overflow {
                    operation,
                    row: coord.row,
                    col: coord.col,
                })?;
            result.store(coord, value);
        }

        Ok(result)
    }
}
