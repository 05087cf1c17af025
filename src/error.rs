//! Error types for the censoring library.
//!
//! Errors are grouped by where they originate: the file system, the
//! credentials, or the remote entity-analysis service.
//! The batch driver treats every variant as a per-file failure.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for censoring operations.
pub type CensorResult<T> = Result<T, CensorError>;

/// Error type for all censoring operations.
#[derive(Debug, Error)]
pub enum CensorError {
    /// Error occurred while reading or writing files
    #[error("IO error for path '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// Input file is not valid UTF-8 text
    #[error("'{}' is not valid UTF-8 text", path.display())]
    Decode { path: PathBuf },

    /// No usable credentials for the remote service
    #[error("Missing credentials: {reason}")]
    Credentials { reason: String },

    /// Transport-level failure talking to the remote service
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote service answered with a non-success status
    #[error("Remote service error {status}: {message}")]
    RemoteService { status: u16, message: String },

    /// Invalid configuration or parameters
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },
}

impl CensorError {
    /// Wraps an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
