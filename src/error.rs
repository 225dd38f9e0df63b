//! Error types for the Wordwise library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`WordwiseError`] enum. The ranking core itself is total and never
//! fails; errors only arise on I/O paths (dictionary files, terminal
//! input) and at the CLI boundary.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Wordwise operations.
#[derive(Error, Debug)]
pub enum WordwiseError {
    /// I/O errors (dictionary files, terminal input, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary-related errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid argument passed at a boundary
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordwiseError.
pub type Result<T> = std::result::Result<T, WordwiseError>;

impl WordwiseError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        WordwiseError::Dictionary(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordwiseError::InvalidArgument(msg.into())
    }
}
