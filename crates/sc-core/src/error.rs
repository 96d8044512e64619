//! Error types for sc-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sc-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read an input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Combining the input files failed
    #[error("failed to combine input files: {0}")]
    Merge(String),

    /// CSV parsing error from the csv crate
    #[error("failed to parse combined document as a table: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook encoding error
    #[error("failed to encode workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
