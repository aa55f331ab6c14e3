//! Error type for I/O, parsing and generation

use sparsity_core::{MtxHeader, SparsityError};
use thiserror::Error;

/// Errors raised by the `sparsity` crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed content at a 1-based line of a Matrix Market file
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A banner or size line rejected by the format validators
    #[error("line {line}: {source}")]
    Format {
        line: usize,
        #[source]
        source: SparsityError,
    },

    #[error("unsupported Matrix Market variant: {0}")]
    Unsupported(MtxHeader),

    #[error(transparent)]
    Matrix(#[from] SparsityError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type for `sparsity` operations
pub type Result<T> = std::result::Result<T, Error>;
