//! Error types for CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading routine records.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open the input file.
    #[error("failed to open {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input has no header row.
    #[error("CSV file is empty: {}", .path.display())]
    EmptyInput { path: PathBuf },

    /// Header row could not be read.
    #[error("failed to read header of {}: {message}", .path.display())]
    Header { path: PathBuf, message: String },

    /// A data row could not be decoded into a record.
    #[error("failed to decode {} at line {line}: {message}", .path.display())]
    Decode {
        path: PathBuf,
        line: u64,
        message: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
