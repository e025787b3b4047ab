#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! sparsemat-core - Sparse integer matrix engine
//!
//! This crate provides the storage model, the `rows=` / `cols=` /
//! `(row, col, value)` text format and the add, subtract and multiply
//! operations. It performs no I/O: callers hand in text and receive text.
//!
//! ```
//! use sparsemat_core::SparseMatrix;
//!
//! let a: SparseMatrix = "rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)".parse().unwrap();
//! let b: SparseMatrix = "rows=2\ncols=2\n(0, 1, 3)\n(1, 0, 4)".parse().unwrap();
//!
//! let product = a.multiply(&b).unwrap();
//! assert_eq!(product.to_text(), "(0, 1, 3)\n(1, 0, 8)");
//! ```

extern crate alloc;

pub mod config;
pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod text;
pub mod traits;
pub mod validation;

pub use config::{DuplicatePolicy, MultiplyStrategy, ParseConfig};
pub use error::*;
pub use format::{header::DataType, TextHeader};
pub use matrix::{Coord, Entry, Shape, SparseMatrix};
pub use ops::{Operation, UnknownOperation};
pub use traits::{MatrixElement, MatrixView};
