//! Sparse matrix storage
//!
//! A [`SparseMatrix`] keeps only its non-zero cells, keyed by a typed
//! [`Coord`]. A missing key reads as zero, and writing zero removes the key,
//! so the map never holds a zero value.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::Result;
use crate::traits::{MatrixElement, MatrixView};
use crate::validation::{validate_coordinate, validate_dimensions};

/// Matrix dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells, saturating at `usize::MAX`
    pub const fn cells(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// True if `(row, col)` is inside the matrix
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Zero-based cell coordinate
///
/// Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One non-zero cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> Entry<T> {
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    pub const fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

/// Renders the entry line `(row, col, value)`
impl<T: core::fmt::Display> core::fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}

/// Sparse integer matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    shape: Shape,
    entries: HashMap<Coord, T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty matrix
    ///
    /// Both dimensions must be positive.
    pub fn from_dimensions(rows: usize, cols: usize) -> Result<Self> {
        let shape = validate_dimensions(rows, cols)?;
        Ok(Self::with_shape(shape))
    }

    /// Create an empty matrix for an already validated shape
    pub(crate) fn with_shape(shape: Shape) -> Self {
        Self {
            shape,
            entries: HashMap::new(),
        }
    }

    /// Create a matrix from entries
    ///
    /// Entries are applied in order through [`set`](Self::set), so a later
    /// entry overwrites an earlier one at the same coordinate and zero values
    /// leave no trace.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Entry<T>>,
    {
        let mut matrix = Self::from_dimensions(rows, cols)?;
        for entry in entries {
            matrix.set(entry.row, entry.col, entry.value)?;
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.shape.rows
    }

    pub fn cols(&self) -> usize {
        self.shape.cols
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True if no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fraction of cells that are non-zero
    pub fn density(&self) -> f64 {
        self.nnz() as f64 / self.shape.cells() as f64
    }

    /// Get the value at `(row, col)`
    ///
    /// Returns zero for cells without an entry, including cells outside the
    /// declared dimensions.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries
            .get(&Coord::new(row, col))
            .copied()
            .unwrap_or(T::ZERO)
    }

    /// True if `(row, col)` holds a non-zero entry
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&Coord::new(row, col))
    }

    /// Set the value at `(row, col)`, returning the previous entry
    ///
    /// Zero removes the entry. Coordinates outside the matrix are rejected
    /// with [`MatrixError::IndexOutOfBounds`](crate::MatrixError::IndexOutOfBounds)
    /// and leave the matrix unchanged.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<Option<T>> {
        validate_coordinate(self.shape, row, col)?;
        Ok(self.store(Coord::new(row, col), value))
    }

    /// Insert or remove without a bounds check
    pub(crate) fn store(&mut self, coord: Coord, value: T) -> Option<T> {
        if value.is_zero() {
            self.entries.remove(&coord)
        } else {
            self.entries.insert(coord, value)
        }
    }

    /// Iterate over stored entries in unspecified order
    pub fn entries(&self) -> impl Iterator<Item = Entry<T>> + '_ {
        self.entries
            .iter()
            .map(|(coord, &value)| Entry::new(coord.row, coord.col, value))
    }

    /// Stored entries in row-major order
    pub fn sorted_entries(&self) -> Vec<Entry<T>> {
        let mut entries: Vec<Entry<T>> = self.entries().collect();
        entries.sort_unstable_by_key(Entry::coord);
        entries
    }

    /// Iterate over the coordinates of stored entries in unspecified order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.entries.keys().copied()
    }
}

impl<T: MatrixElement> MatrixView for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> T {
        self.get(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.shape.rows, self.shape.cols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}
