//! Text format definitions for sparse matrix files
//!
//! This module contains the grammar of the `rows=` / `cols=` header and the
//! `(row, col, value)` entry lines. No I/O, only token and layout definitions.

pub mod constants;
pub mod header;

pub use header::TextHeader;
