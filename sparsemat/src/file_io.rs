//! File I/O for matrix text files
//!
//! This module reads matrix text from files or streams into the engine and
//! writes engine output back, with the `rows=` / `cols=` header prepended.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use sparsemat_core::{MatrixElement, ParseConfig, SparseMatrix};

use crate::error::{Error, Result};

/// Density above which sparse storage costs more than it saves
pub const DENSE_WARNING_THRESHOLD: f64 = 0.5;

/// Reader and writer for matrix text files
pub struct MatrixFile;

impl MatrixFile {
    /// Read and parse a matrix file
    pub fn read<T, P>(path: P, config: &ParseConfig) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "read matrix file");

        let matrix = SparseMatrix::from_text_with(&source, config)?;
        log_loaded(&matrix, &path.display().to_string());
        Ok(matrix)
    }

    /// Read and parse a matrix from any reader
    pub fn read_from<T, R>(mut reader: R, config: &ParseConfig) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement,
        R: Read,
    {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;

        let matrix = SparseMatrix::from_text_with(&source, config)?;
        log_loaded(&matrix, "<stream>");
        Ok(matrix)
    }

    /// Serialize a matrix, header included, to a file
    ///
    /// The file is created or truncated.
    pub fn write<T, P>(path: P, matrix: &SparseMatrix<T>) -> Result<()>
    where
        T: MatrixElement,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let document = matrix.to_document();
        fs::write(path, &document).map_err(|e| Error::io(path, e))?;

        tracing::debug!(
            path = %path.display(),
            bytes = document.len(),
            nnz = matrix.nnz(),
            "wrote matrix file"
        );
        Ok(())
    }

    /// Serialize a matrix, header included, to any writer
    pub fn write_to<T, W>(mut writer: W, matrix: &SparseMatrix<T>) -> Result<()>
    where
        T: MatrixElement,
        W: Write,
    {
        writer.write_all(matrix.to_document().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

fn log_loaded<T: MatrixElement>(matrix: &SparseMatrix<T>, source: &str) {
    tracing::debug!(
        source,
        shape = %matrix.shape(),
        nnz = matrix.nnz(),
        "parsed matrix"
    );
    if matrix.density() > DENSE_WARNING_THRESHOLD {
        tracing::warn!(
            source,
            density = matrix.density(),
            "matrix is mostly non-zero; sparse storage is inefficient"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparsemat_core::{FormatErrorKind, MatrixError, Shape};

    #[test]
    fn test_read_from_stream() {
        let text = "rows=2\ncols=3\n(0, 2, 7)\n(1, 0, -1)\n";
        let m: SparseMatrix = MatrixFile::read_from(text.as_bytes(), &ParseConfig::default()).unwrap();
        assert_eq!(m.shape(), Shape::new(2, 3));
        assert_eq!(m.get(0, 2), 7);
        assert_eq!(m.get(1, 0), -1);
    }

    #[test]
    fn test_read_from_stream_format_error() {
        let text = "rows=2\ncols=2\n(0,0,x)";
        let err = MatrixFile::read_from::<i64, _>(text.as_bytes(), &ParseConfig::default())
            .unwrap_err();
        assert_eq!(
            err.matrix_error(),
            Some(&MatrixError::Format {
                line: 3,
                kind: FormatErrorKind::InvalidValue
            })
        );
    }

    #[test]
    fn test_write_to_stream() {
        let m: SparseMatrix = "rows=2\ncols=2\n(1, 1, 4)\n(0, 0, 3)".parse().unwrap();
        let mut out = Vec::new();
        MatrixFile::write_to(&mut out, &m).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "rows=2\ncols=2\n(0, 0, 3)\n(1, 1, 4)\n"
        );
    }

    #[test]
    fn test_read_missing_file() {
        let err = MatrixFile::read::<i64, _>(
            "/nonexistent/sparsemat/matrix.txt",
            &ParseConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/sparsemat/matrix.txt"));
    }
}
