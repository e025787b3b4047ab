//! Validation utilities for the matrix text format
//!
//! This module contains pure parsing and bounds checks with no I/O dependencies.
//! Errors are reported as bare [`FormatErrorKind`](crate::FormatErrorKind)s;
//! callers attach line numbers.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_coordinate, validate_dimensions};
pub use parsing::{is_blank_line, parse_entry_line, parse_header_line};
