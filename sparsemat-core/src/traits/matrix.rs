//! Read-only matrix access traits
//!
//! This trait describes what the arithmetic needs to see of an operand,
//! independent of how the non-zero entries are stored.

use super::element::MatrixElement;

/// Core sparse matrix trait for storage-agnostic access
pub trait MatrixView {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `Element::ZERO` if the element is not stored, including for
    /// positions outside the matrix.
    fn get_element(&self, row: usize, col: usize) -> Self::Element;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}
