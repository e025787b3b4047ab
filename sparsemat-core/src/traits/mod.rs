//! Abstract interfaces for sparse matrices
//!
//! This module defines the element constraint and the read-only view trait
//! implemented by [`SparseMatrix`](crate::SparseMatrix).

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::MatrixView;
