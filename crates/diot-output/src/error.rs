//! Error types for report output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing the report files.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output file could not be created.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Buffered records could not be flushed to disk.
    #[error("failed to flush {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Both sinks would resolve to the same file.
    #[error("pipe-delimited and comma-delimited outputs share one path: {path}")]
    SamePath { path: PathBuf },

    /// A row does not match the target schema width.
    #[error("output row {row} has {got} fields, the target schema has {want}")]
    RowWidth { row: usize, got: usize, want: usize },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
