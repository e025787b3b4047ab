//! Dimension and coordinate bounds validation
//!
//! Pure checks on shapes and coordinates. Reads never go through these:
//! out-of-range reads are answered with zero by the matrix itself.

use crate::error::MatrixError;
use crate::matrix::Shape;

/// Validate that both dimensions are positive
pub const fn validate_dimensions(rows: usize, cols: usize) -> Result<Shape, MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidDimensions { rows, cols });
    }
    Ok(Shape::new(rows, cols))
}

/// Validate that a coordinate lies inside `shape`
pub const fn validate_coordinate(shape: Shape, row: usize, col: usize) -> Result<(), MatrixError> {
    if row >= shape.rows || col >= shape.cols {
        return Err(MatrixError::IndexOutOfBounds { row, col, shape });
    }
    Ok(())
}
