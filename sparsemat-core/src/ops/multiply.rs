//! Matrix multiplication
//!
//! Two strategies with identical output, including which cell an overflow is
//! reported at:
//!
//! - [`MultiplyStrategy::Indexed`] buckets the right operand by row and joins
//!   each non-zero `(i, k)` of the left operand against row `k`.
//! - [`MultiplyStrategy::Dense`] visits every output cell and sums over the
//!   full inner dimension.
//!
//! Both sum the non-zero products of a cell in increasing `k`, and both
//! report the first overflowing cell in row-major order.

use alloc::vec::Vec;
use hashbrown::HashMap;

use super::Operation;
use crate::config::MultiplyStrategy;
use crate::error::{MatrixError, Result};
use crate::matrix::{Coord, Shape, SparseMatrix};
use crate::traits::{MatrixElement, MatrixView};

impl<T: MatrixElement> SparseMatrix<T> {
    /// Matrix product `self * other` using the default strategy
    ///
    /// Fails with `DimensionMismatch` unless `self.cols() == other.rows()`.
    /// The result is `self.rows() x other.cols()`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.multiply_with(other, MultiplyStrategy::default())
    }

    /// Matrix product `self * other` using an explicit strategy
    pub fn multiply_with(&self, other: &Self, strategy: MultiplyStrategy) -> Result<Self> {
        let shape = Operation::Multiply.result_shape(self.shape(), other.shape())?;
        match strategy {
            MultiplyStrategy::Indexed => multiply_indexed(self, other, shape),
            MultiplyStrategy::Dense => multiply_dense(self, other, shape),
        }
    }
}

const fn overflow(row: usize, col: usize) -> MatrixError {
    MatrixError::Overflow {
        operation: Operation::Multiply,
        row,
        col,
    }
}

/// Group entries by row as `(col, value)` pairs sorted by column
fn rows_of<T: MatrixElement>(matrix: &SparseMatrix<T>) -> HashMap<usize, Vec<(usize, T)>> {
    let mut rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
    for entry in matrix.entries() {
        rows.entry(entry.row)
            .or_default()
            .push((entry.col, entry.value));
    }
    for row in rows.values_mut() {
        row.sort_unstable_by_key(|&(col, _)| col);
    }
    rows
}

fn multiply_indexed<T: MatrixElement>(
    lhs: &SparseMatrix<T>,
    rhs: &SparseMatrix<T>,
    shape: Shape,
) -> Result<SparseMatrix<T>> {
    let rhs_rows = rows_of(rhs);
    let lhs_rows = rows_of(lhs);

    let mut row_order: Vec<usize> = lhs_rows.keys().copied().collect();
    row_order.sort_unstable();

    let mut result = SparseMatrix::with_shape(shape);
    // `None` marks a cell whose running sum has overflowed
    let mut accumulator: HashMap<usize, Option<T>> = HashMap::new();

    for i in row_order {
        accumulator.clear();

        for &(k, a) in &lhs_rows[&i] {
            let Some(rhs_row) = rhs_rows.get(&k) else {
                continue;
            };
            for &(j, b) in rhs_row {
                let slot = accumulator.entry(j).or_insert(Some(T::ZERO));
                *slot = slot.and_then(|sum| sum.checked_add(a.checked_mul(b)?));
            }
        }

        if let Some(col) = accumulator
            .iter()
            .filter(|(_, sum)| sum.is_none())
            .map(|(&col, _)| col)
            .min()
        {
            return Err(overflow(i, col));
        }

        for (j, sum) in accumulator.drain() {
            if let Some(value) = sum {
                result.store(Coord::new(i, j), value);
            }
        }
    }

    Ok(result)
}

fn multiply_dense<T, L, R>(lhs: &L, rhs: &R, shape: Shape) -> Result<SparseMatrix<T>>
where
    T: MatrixElement,
    L: MatrixView<Element = T>,
    R: MatrixView<Element = T>,
{
    let (_, inner) = lhs.dimensions();
    let mut result = SparseMatrix::with_shape(shape);

    for i in 0..shape.rows {
        for j in 0..shape.cols {
            let mut sum = T::ZERO;
            for k in 0..inner {
                let product = lhs
                    .get_element(i, k)
                    .checked_mul(rhs.get_element(k, j))
                    .ok_or(overflow(i, j))?;
                sum = sum.checked_add(product).ok_or(overflow(i, j))?;
            }
            result.store(Coord::new(i, j), sum);
        }
    }

    Ok(result)
}
