//! Error types for the token index.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while reading or appending to an index file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The index file is not in the state the store expects, either
    /// because its contents are malformed or because it was created or
    /// removed behind our back.
    #[error("inconsistent index {path}: {message}")]
    Inconsistent { path: String, message: String },

    /// A token cannot be written as a single index line.
    #[error("cannot index token {token:?}: tokens must be one non-empty line")]
    InvalidToken { token: String },

    /// Reading or writing the index file failed.
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub(crate) fn inconsistent(path: &Path, message: impl Into<String>) -> Self {
        StoreError::Inconsistent {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result type for index operations.
pub type StoreResult<T> = Result<T, StoreError>;
