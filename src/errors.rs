//! Custom error types for the PageHawk report generator.
//!
//! Only the file-writing edges of the pipeline produce errors; the data
//! transformations themselves degrade to empty or neutral values instead.

use std::path::PathBuf;

/// The main error type for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// I/O error (file read/write, permissions, etc.)
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid path error
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Result type alias using ReportError
pub type ReportResult<T> = Result<T, ReportError>;

impl ReportError {
    /// Create an I/O error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

}

/// Convert from raw I/O errors (without path context)
impl From<std::io::Error> for ReportError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}
