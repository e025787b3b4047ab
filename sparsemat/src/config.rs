//! Engine configuration loading
//!
//! Settings can come from a JSON file and be refined with builder methods
//! (the command-line front end maps its flags onto those methods):
//!
//! ```json
//! {
//!   "parse": { "duplicates": "reject" },
//!   "multiply": "dense"
//! }
//! ```
//!
//! Every field is optional and falls back to its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sparsemat_core::{DuplicatePolicy, MultiplyStrategy, ParseConfig};

use crate::error::{Error, Result};

/// Configuration for loading and combining matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Text parsing options
    pub parse: ParseConfig,
    /// Multiplication algorithm
    pub multiply: MultiplyStrategy,
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Set the multiplication strategy
    pub fn with_multiply_strategy(mut self, strategy: MultiplyStrategy) -> Self {
        self.multiply = strategy;
        self
    }

    /// Set the duplicate coordinate policy
    pub fn with_duplicate_policy(mut self, duplicates: DuplicatePolicy) -> Self {
        self.parse = self.parse.with_duplicate_policy(duplicates);
        self
    }
}
