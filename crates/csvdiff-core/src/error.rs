//! Error types for csvdiff-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in csvdiff-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error from the csv crate
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Encoding label not known to encoding_rs
    #[error("unknown encoding: '{0}'")]
    UnknownEncoding(String),

    /// File content is not valid in the requested encoding
    #[error("failed to decode '{path}' as {encoding}")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    /// The two datasets have a different number of columns
    #[error("different column count in CSV files ({left} vs {right})")]
    ColumnCountMismatch { left: usize, right: usize },

    /// Key column number outside 1..=columns
    #[error("invalid primary key column {key} (range: 1-{columns})")]
    InvalidKeyColumn { key: usize, columns: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
