//! sparsemat - Sparse matrix files and arithmetic
//!
//! This library wraps the `sparsemat-core` engine with the boundary it leaves
//! out: reading matrix text files, writing results, loading configuration and
//! logging what happened.
//!
//! ## Architecture
//!
//! - **sparsemat-core**: storage, text format, arithmetic (no I/O)
//! - **sparsemat**: file and stream I/O, JSON configuration, pipeline, CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sparsemat::{EngineConfig, Operation, Pipeline};
//!
//! fn example() -> sparsemat::Result<()> {
//!     let pipeline = Pipeline::new(EngineConfig::default());
//!     let summary = pipeline.run(Operation::Multiply, "a.txt", "b.txt", "result.txt")?;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```

// Re-export the engine
pub use sparsemat_core::{
    // Storage
    Coord, Entry, Shape, SparseMatrix,
    // Traits
    MatrixElement, MatrixView,
    // Operations and configuration
    DuplicatePolicy, MultiplyStrategy, Operation, ParseConfig,
    // Format
    DataType, TextHeader,
    // Engine errors
    ErrorCategory, FormatErrorKind, HeaderField, MatrixError, UnknownOperation,
};

pub mod config;
pub mod error;
pub mod file_io;
pub mod pipeline;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use file_io::MatrixFile;
pub use pipeline::{MatrixInfo, OperationSummary, Pipeline};
