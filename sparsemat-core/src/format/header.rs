//! Matrix text header definitions
//!
//! This module contains the two-line `rows=` / `cols=` header and the
//! element data type tag.

use super::constants::{HEADER_SEPARATOR, LINE_TERMINATOR};
use crate::error::{FormatErrorKind, HeaderField, MatrixError, Result};
use crate::matrix::Shape;
use crate::validation::parse_header_line;

/// Header of a matrix text file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextHeader {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl TextHeader {
    /// Create a header for the given dimensions
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Dimensions declared by the header
    pub const fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Parse the header from numbered lines
    ///
    /// Consumes exactly two lines from `lines`. Line numbers are 1-based and
    /// are used for error reporting only.
    pub fn parse<'a, I>(lines: &mut I) -> Result<Self>
    where
        I: Iterator<Item = (usize, &'a str)>,
    {
        let (rows_line, rows) = Self::parse_field(lines, HeaderField::Rows, 1)?;
        let (_, cols) = Self::parse_field(lines, HeaderField::Cols, rows_line + 1)?;
        Ok(Self { rows, cols })
    }

    /// Returns the line number consumed and the parsed value
    fn parse_field<'a, I>(
        lines: &mut I,
        field: HeaderField,
        missing_line: usize,
    ) -> Result<(usize, usize)>
    where
        I: Iterator<Item = (usize, &'a str)>,
    {
        let (line_no, line) = lines.next().ok_or(MatrixError::format(
            missing_line,
            FormatErrorKind::MissingHeader(field),
        ))?;

        let value =
            parse_header_line(line, field).map_err(|kind| MatrixError::format(line_no, kind))?;

        if value == 0 {
            return Err(MatrixError::format(
                line_no,
                FormatErrorKind::ZeroDimension(field),
            ));
        }
        Ok((line_no, value))
    }
}

impl From<Shape> for TextHeader {
    fn from(shape: Shape) -> Self {
        Self::new(shape.rows, shape.cols)
    }
}

impl core::fmt::Display for TextHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}{HEADER_SEPARATOR}{}{LINE_TERMINATOR}{}{HEADER_SEPARATOR}{}",
            HeaderField::Rows.key(),
            self.rows,
            HeaderField::Cols.key(),
            self.cols
        )
    }
}

/// Element data types supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// 128-bit signed integer
    I128,
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::I32 => write!(f, "i32"),
            DataType::I64 => write!(f, "i64"),
            DataType::I128 => write!(f, "i128"),
        }
    }
}
