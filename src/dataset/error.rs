//! Dataset error types
//!
//! All errors here are startup-fatal: the dashboard refuses to serve on a
//! dataset it could not fully load.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Input file could not be opened or read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV-level parse failure (malformed quoting, bad record, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Schema mismatch: missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A row's timestamp could not be parsed by any accepted format
    #[error("Line {line}: unparsable timestamp '{value}'")]
    Timestamp { line: usize, value: String },

    /// A row's metric value is not an integer
    #[error("Line {line}: invalid value '{value}' in column '{column}'")]
    Metric {
        line: usize,
        column: &'static str,
        value: String,
    },

    /// A row is too short to contain a required column
    #[error("Line {line}: missing field for column '{column}'")]
    MissingField { line: usize, column: &'static str },
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
