//! Text codec for sparse matrices
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 5)
//! (2, 1, -4)
//! ```
//!
//! Blank lines before the header are skipped. The first two remaining lines
//! are the header, every later non-blank line is one entry. Parsing is all-or-nothing: the first malformed line aborts with a
//! [`MatrixError::Format`] carrying its 1-based line number.

use alloc::string::String;
use core::fmt::Write;
use core::str::FromStr;
use hashbrown::HashSet;

use crate::config::{DuplicatePolicy, ParseConfig};
use crate::error::{FormatErrorKind, MatrixError, Result};
use crate::format::constants::LINE_TERMINATOR;
use crate::format::TextHeader;
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;
use crate::validation::{is_blank_line, parse_entry_line};

impl<T: MatrixElement> SparseMatrix<T> {
    /// Parse a matrix from text with the default [`ParseConfig`]
    pub fn from_text(source: &str) -> Result<Self> {
        Self::from_text_with(source, &ParseConfig::default())
    }

    /// Parse a matrix from text
    pub fn from_text_with(source: &str, config: &ParseConfig) -> Result<Self> {
        let mut lines = source
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .skip_while(|&(_, line)| is_blank_line(line));

        let header = TextHeader::parse(&mut lines)?;
        let shape = header.shape();
        let mut matrix = Self::with_shape(shape);
        // Zero entries are never stored, so duplicates are tracked separately
        let mut seen = (config.duplicates == DuplicatePolicy::Reject).then(HashSet::new);

        for (line_no, line) in lines {
            if is_blank_line(line) {
                continue;
            }

            let entry =
                parse_entry_line::<T>(line).map_err(|kind| MatrixError::format(line_no, kind))?;

            if !shape.contains(entry.row, entry.col) {
                return Err(MatrixError::format(
                    line_no,
                    FormatErrorKind::CoordinateOutOfBounds,
                ));
            }

            if let Some(seen) = seen.as_mut() {
                if !seen.insert(entry.coord()) {
                    return Err(MatrixError::format(line_no, FormatErrorKind::DuplicateEntry));
                }
            }

            matrix.store(entry.coord(), entry.value);
        }

        Ok(matrix)
    }

    /// Entry lines in row-major order, joined by newlines, without header
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, entry) in self.sorted_entries().iter().enumerate() {
            if i > 0 {
                out.push(LINE_TERMINATOR);
            }
            // Writing into a String cannot fail
            let _ = write!(out, "{entry}");
        }
        out
    }

    /// Full document: header then entry lines, each newline-terminated
    pub fn to_document(&self) -> String {
        let mut out = String::new();
        let _ = self.write_document(&mut out);
        out
    }

    /// Write the full document into any [`core::fmt::Write`] sink
    pub fn write_document<W: Write>(&self, out: &mut W) -> core::fmt::Result {
        writeln!(out, "{}", TextHeader::from(self.shape()))?;
        for entry in self.sorted_entries() {
            writeln!(out, "{entry}")?;
        }
        Ok(())
    }
}

/// Renders the full document, header included
impl<T: MatrixElement> core::fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write_document(f)
    }
}

impl<T: MatrixElement> FromStr for SparseMatrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeaderField;
    use crate::matrix::{Entry, Shape};
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_parse() {
        let m = SparseMatrix::<i64>::from_text("rows=3\ncols=4\n(0, 1, 5)\n(2, 3, -7)\n").unwrap();
        assert_eq!(m.shape(), Shape::new(3, 4));
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get(0, 1), 5);
        assert_eq!(m.get(2, 3), -7);
    }

    #[test]
    fn test_parse_blank_lines_and_crlf() {
        let m = SparseMatrix::<i64>::from_text("rows=2\r\ncols=2\r\n\r\n(0, 0, 1)\r\n   \r\n(1, 1, 2)\r\n\r\n")
            .unwrap();
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get(1, 1), 2);
    }

    #[test]
    fn test_parse_leading_blank_lines() {
        let m = SparseMatrix::<i64>::from_text("\n\nrows=2\ncols=2\n(0, 0, 1)\n").unwrap();
        assert_eq!(m.shape(), Shape::new(2, 2));
        assert_eq!(m.get(0, 0), 1);

        // Line numbers still count the skipped lines
        assert_eq!(
            SparseMatrix::<i64>::from_text("\n  \nrows=2\ncols=2\n(0, 0, q)"),
            Err(MatrixError::format(5, FormatErrorKind::InvalidValue))
        );
        assert_eq!(
            SparseMatrix::<i64>::from_text("\n\ncols=2\nrows=2"),
            Err(MatrixError::format(3, FormatErrorKind::InvalidHeader(HeaderField::Rows)))
        );
        assert_eq!(
            SparseMatrix::<i64>::from_text("\n\n"),
            Err(MatrixError::format(1, FormatErrorKind::MissingHeader(HeaderField::Rows)))
        );
    }

    #[test]
    fn test_parse_header_only() {
        let m = SparseMatrix::<i64>::from_text("rows=5\ncols=6").unwrap();
        assert!(m.is_empty());
        assert_eq!(m.shape(), Shape::new(5, 6));
    }

    #[test]
    fn test_parse_zero_entries_absorbed() {
        let m = SparseMatrix::<i64>::from_text("rows=2\ncols=2\n(0, 0, 0)\n(1, 1, 3)").unwrap();
        assert_eq!(m.nnz(), 1);
        assert!(!m.contains(0, 0));
    }

    #[test]
    fn test_parse_duplicates() {
        let text = "rows=2\ncols=2\n(0, 0, 1)\n(0, 0, 9)";
        let m = SparseMatrix::<i64>::from_text(text).unwrap();
        assert_eq!(m.get(0, 0), 9);
        assert_eq!(m.nnz(), 1);

        // Later zero erases the earlier value
        let m = SparseMatrix::<i64>::from_text("rows=2\ncols=2\n(0, 0, 1)\n(0, 0, 0)").unwrap();
        assert!(m.is_empty());

        assert_eq!(
            SparseMatrix::<i64>::from_text_with(text, &ParseConfig::strict()),
            Err(MatrixError::format(4, FormatErrorKind::DuplicateEntry))
        );
        assert_eq!(
            SparseMatrix::<i64>::from_text_with(
                "rows=2\ncols=2\n(0, 0, 0)\n(0, 0, 4)",
                &ParseConfig::strict()
            ),
            Err(MatrixError::format(4, FormatErrorKind::DuplicateEntry))
        );

        // Distinct coordinates pass under the strict policy
        let m = SparseMatrix::<i64>::from_text_with(
            "rows=2\ncols=2\n(0, 0, 1)\n(1, 0, 2)",
            &ParseConfig::strict(),
        )
        .unwrap();
        assert_eq!(m.nnz(), 2);
    }

    #[test]
    fn test_parse_rejects_non_integer_value() {
        assert_eq!(
            SparseMatrix::<i64>::from_text("rows=2\ncols=2\n(0,0,x)"),
            Err(MatrixError::format(3, FormatErrorKind::InvalidValue))
        );
    }

    #[test]
    fn test_parse_errors() {
        let cases = [
            (
                "cols=2\nrows=2",
                MatrixError::format(1, FormatErrorKind::InvalidHeader(HeaderField::Rows)),
            ),
            (
                "",
                MatrixError::format(1, FormatErrorKind::MissingHeader(HeaderField::Rows)),
            ),
            (
                "rows=2\ncols=2\n(0, 0, 1)\n0, 1, 2",
                MatrixError::format(4, FormatErrorKind::MalformedEntry),
            ),
            (
                "rows=2\ncols=2\n(0, 0)",
                MatrixError::format(3, FormatErrorKind::MalformedEntry),
            ),
            (
                "rows=2\ncols=2\n\n(0, 2, 1)",
                MatrixError::format(4, FormatErrorKind::CoordinateOutOfBounds),
            ),
            (
                "rows=2\ncols=2\n(-1, 0, 1)",
                MatrixError::format(3, FormatErrorKind::InvalidCoordinate),
            ),
            (
                "rows=2\ncols=0",
                MatrixError::format(2, FormatErrorKind::ZeroDimension(HeaderField::Cols)),
            ),
        ];

        for (text, expected) in cases {
            assert_eq!(SparseMatrix::<i64>::from_text(text), Err(expected), "{text:?}");
        }
    }

    #[test]
    fn test_parse_stops_at_first_error() {
        // Both lines are bad; the first one is reported
        let err = SparseMatrix::<i64>::from_text("rows=2\ncols=2\n(0, 0, a)\n(9, 9, 1)").unwrap_err();
        assert_eq!(err, MatrixError::format(3, FormatErrorKind::InvalidValue));
    }

    #[test]
    fn test_to_text_row_major() {
        let m = SparseMatrix::from_entries(
            3,
            3,
            vec![
                Entry::new(2, 0, 1i64),
                Entry::new(0, 2, -2),
                Entry::new(0, 1, 3),
            ],
        )
        .unwrap();
        assert_eq!(m.to_text(), "(0, 1, 3)\n(0, 2, -2)\n(2, 0, 1)");
        assert_eq!(
            m.to_document(),
            "rows=3\ncols=3\n(0, 1, 3)\n(0, 2, -2)\n(2, 0, 1)\n"
        );
        assert_eq!(m.to_string(), m.to_document());
    }

    #[test]
    fn test_empty_result_serializes_header_only() {
        let a = SparseMatrix::<i64>::from_text("rows=2\ncols=2\n(0, 0, 4)\n(1, 0, 2)").unwrap();
        let diff = a.subtract(&a).unwrap();
        assert_eq!(diff.to_text(), "");
        assert_eq!(diff.to_document(), "rows=2\ncols=2\n");
    }

    #[test]
    fn test_roundtrip() {
        let m = SparseMatrix::from_entries(
            4,
            2,
            vec![
                Entry::new(3, 1, i64::MIN),
                Entry::new(0, 0, i64::MAX),
                Entry::new(1, 1, -1),
            ],
        )
        .unwrap();
        let parsed: SparseMatrix = m.to_document().parse().unwrap();
        assert_eq!(parsed, m);
    }
}
