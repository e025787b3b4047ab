//! Load, compute, write
//!
//! A [`Pipeline`] ties the file layer to the engine: it reads two operand
//! files, applies one [`Operation`] and writes the result file. Nothing is
//! written unless the whole computation succeeds.

use std::path::{Path, PathBuf};
use std::time::Instant;

use sparsemat_core::{DataType, MatrixElement, MatrixView, Operation, Shape, SparseMatrix};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::file_io::MatrixFile;

/// Outcome of a completed [`Pipeline::run`]
#[derive(Debug, Clone, PartialEq)]
pub struct OperationSummary {
    pub operation: Operation,
    pub shape: Shape,
    pub nnz: usize,
    pub output: PathBuf,
}

impl std::fmt::Display for OperationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} result ({}, {} non-zero) written to {}",
            capitalize(self.operation.name()),
            self.shape,
            self.nnz,
            self.output.display()
        )
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Shape and fill statistics of a matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixInfo {
    pub shape: Shape,
    pub nnz: usize,
    pub density: f64,
    pub data_type: DataType,
}

impl MatrixInfo {
    /// Describe any matrix view
    pub fn of<M: MatrixView>(matrix: &M) -> Self {
        let (rows, cols) = matrix.dimensions();
        let shape = Shape::new(rows, cols);
        let nnz = matrix.nnz();
        Self {
            shape,
            nnz,
            density: nnz as f64 / shape.cells() as f64,
            data_type: <M::Element as MatrixElement>::data_type(),
        }
    }
}

impl std::fmt::Display for MatrixInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "shape:   {}", self.shape)?;
        writeln!(f, "nnz:     {}", self.nnz)?;
        writeln!(f, "density: {:.6}", self.density)?;
        write!(f, "type:    {}", self.data_type)
    }
}

/// Runs operations between matrix files
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: EngineConfig,
}

impl Pipeline {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read a matrix file with the configured parse options
    pub fn load<T: MatrixElement>(&self, path: impl AsRef<Path>) -> Result<SparseMatrix<T>> {
        MatrixFile::read(path, &self.config.parse)
    }

    /// Apply an operation in memory with the configured strategy
    pub fn compute<T: MatrixElement>(
        &self,
        operation: Operation,
        lhs: &SparseMatrix<T>,
        rhs: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        let start = Instant::now();
        let result = operation.apply(lhs, rhs, self.config.multiply)?;
        tracing::info!(
            operation = operation.verb(),
            lhs = %lhs.shape(),
            rhs = %rhs.shape(),
            result = %result.shape(),
            nnz = result.nnz(),
            strategy = %self.config.multiply,
            elapsed = ?start.elapsed(),
            "operation complete"
        );
        Ok(result)
    }

    /// Read both operands, apply `operation` and write the result to `output`
    pub fn run(
        &self,
        operation: Operation,
        lhs: impl AsRef<Path>,
        rhs: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<OperationSummary> {
        let lhs: SparseMatrix<i64> = self.load(lhs)?;
        let rhs: SparseMatrix<i64> = self.load(rhs)?;
        let result = self.compute(operation, &lhs, &rhs)?;

        let output = output.as_ref();
        MatrixFile::write(output, &result)?;

        Ok(OperationSummary {
            operation,
            shape: result.shape(),
            nnz: result.nnz(),
            output: output.to_path_buf(),
        })
    }
}
