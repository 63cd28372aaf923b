//! Error types for scan operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a delimited file.
///
/// End of file is not an error: read operations signal it with `Ok(None)`.
/// Likewise an empty file is a benign no-data result, never a failure.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A record's field count differs from the shape set by the first record.
    ///
    /// `row` is the 1-based data-row number of the offending record; a
    /// designated header row is row 0 and never counted.
    #[error("row {row}: expected {expected} columns, found {actual}")]
    ColumnMismatch {
        row: u64,
        expected: usize,
        actual: usize,
    },

    /// The underlying record parse failed for a non-EOF reason.
    ///
    /// `row` is the 1-based data-row number of the record being read; a
    /// failing header row is row 0.
    #[error("row {row}: {source}")]
    Read {
        row: u64,
        #[source]
        source: csv::Error,
    },

    /// Chunked scans need room for at least one record per chunk.
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,

    /// Other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;
