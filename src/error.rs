//! Error types for the Deskbot library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`DeskbotError`] enum.
//!
//! # Examples
//!
//! ```
//! use deskbot::error::{DeskbotError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DeskbotError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Deskbot operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides convenient constructor methods for the string-carrying variants.
#[derive(Error, Debug)]
pub enum DeskbotError {
    /// I/O errors (reading the intents or orders files, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (malformed or invalid intents definition)
    #[error("Config error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Classification-related errors
    #[error("Classification error: {0}")]
    Classification(String),

    /// Invalid argument supplied by the caller or end user
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with DeskbotError.
pub type Result<T> = std::result::Result<T, DeskbotError>;

impl DeskbotError {
    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DeskbotError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DeskbotError::Analysis(msg.into())
    }

    /// Create a new classification error.
    pub fn classification<S: Into<String>>(msg: S) -> Self {
        DeskbotError::Classification(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DeskbotError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DeskbotError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeskbotError::config("missing fallback intent");
        assert_eq!(err.to_string(), "Config error: missing fallback intent");

        let err = DeskbotError::invalid_argument("empty message");
        assert_eq!(err.to_string(), "Invalid argument: empty message");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: DeskbotError = io_err.into();
        assert!(matches!(err, DeskbotError::Io(_)));
    }
}
