//! Line parsers for the matrix text format
//!
//! This module provides pure parsing functions for the header and entry
//! lines with no I/O dependencies.

use crate::error::{FormatErrorKind, HeaderField};
use crate::format::constants::{ENTRY_CLOSE, ENTRY_OPEN, ENTRY_SEPARATOR, HEADER_SEPARATOR};
use crate::matrix::Entry;
use crate::traits::MatrixElement;

/// True if the line holds nothing but whitespace
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Parse a header line of the form `<key>=<integer>`
///
/// Whitespace around the key and the value is ignored. The key must match
/// `field` exactly.
pub fn parse_header_line(line: &str, field: HeaderField) -> Result<usize, FormatErrorKind> {
    let invalid = FormatErrorKind::InvalidHeader(field);

    let (key, value) = line.split_once(HEADER_SEPARATOR).ok_or(invalid)?;
    if key.trim() != field.key() {
        return Err(invalid);
    }

    parse_usize(value.trim()).ok_or(invalid)
}

/// Parse an entry line of the form `(row, col, value)`
///
/// Bounds are not checked here; the parser compares the coordinate against
/// the header once the whole entry is known to be well formed.
pub fn parse_entry_line<T: MatrixElement>(line: &str) -> Result<Entry<T>, FormatErrorKind> {
    let inner = line
        .trim()
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(FormatErrorKind::MalformedEntry)?;

    let mut tokens = inner.split(ENTRY_SEPARATOR).map(str::trim);
    let (Some(row), Some(col), Some(value), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(FormatErrorKind::MalformedEntry);
    };

    let row = parse_usize(row).ok_or(FormatErrorKind::InvalidCoordinate)?;
    let col = parse_usize(col).ok_or(FormatErrorKind::InvalidCoordinate)?;
    let value = value
        .parse::<T>()
        .map_err(|_| FormatErrorKind::InvalidValue)?;

    Ok(Entry::new(row, col, value))
}

/// Parse a non-negative decimal integer
///
/// Only ASCII digits are accepted: no sign, no internal whitespace.
fn parse_usize(s: &str) -> Option<usize> {
    if s.is_empty() {
        return None;
    }

    let mut result: usize = 0;
    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let digit = (byte - b'0') as usize;
        result = result.checked_mul(10)?.checked_add(digit)?;
    }

    Some(result)
}
