//! Tokens of the matrix text format

/// Key of the first header line
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line
pub const COLS_KEY: &str = "cols";

/// Separator between header key and value
pub const HEADER_SEPARATOR: char = '=';

/// Opening delimiter of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between entry tokens
pub const ENTRY_SEPARATOR: char = ',';

/// Line terminator used when writing
pub const LINE_TERMINATOR: char = '\n';
