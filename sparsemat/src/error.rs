//! Error types for the file and command-line layer

use std::path::PathBuf;

use sparsemat_core::MatrixError;
use thiserror::Error;

/// Errors raised while loading, computing or writing matrices
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing a caller-supplied stream failed
    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    /// Malformed input, incompatible operands or overflow
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// Configuration file could not be read
    #[error("invalid configuration in {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration text is not valid JSON for [`EngineConfig`](crate::EngineConfig)
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Operation name or code not recognised
    #[error("unknown operation `{0}`, expected 1/add, 2/subtract or 3/multiply")]
    UnknownOperation(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// The engine error underneath, if any
    pub fn matrix_error(&self) -> Option<&MatrixError> {
        match self {
            Error::Matrix(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for file and command-line operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_io_message_leaves_cause_to_source() {
        let err = Error::io("data/a.txt", io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert_eq!(err.to_string(), "I/O error on data/a.txt");
        assert_eq!(
            err.source().map(|e| e.to_string()),
            Some("no such file".to_string())
        );
    }

    #[test]
    fn test_config_message_leaves_cause_to_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::Config {
            path: PathBuf::from("engine.json"),
            source,
        };
        assert_eq!(err.to_string(), "invalid configuration in engine.json");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_unknown_operation_message() {
        let err = Error::UnknownOperation("divide".to_string());
        assert_eq!(
            err.to_string(),
            "unknown operation `divide`, expected 1/add, 2/subtract or 3/multiply"
        );
        assert!(err.matrix_error().is_none());
    }
}
