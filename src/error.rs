//! Error types and handling infrastructure for pincell.
//!
//! The PIN controller itself has no failure paths: every UI event it consumes is
//! well-formed and over-long input is truncated rather than rejected. Errors only arise at
//! the edges, when a control is configured or when the terminal and configuration file are
//! touched by the demo application.
//!
//! `thiserror` describes the library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pincell operations.
#[derive(Error, Debug)]
pub enum PincellError {
    /// A control was configured with zero cells
    #[error("Invalid PIN length {length}: a PIN control needs at least one cell")]
    InvalidPinLength { length: usize },

    /// Configuration file could not be parsed or holds bad values
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Configuration file path does not point at a readable file
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Terminal or file system I/O failure
    #[error("I/O operation failed: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for pincell operations.
pub type Result<T> = std::result::Result<T, PincellError>;

impl PincellError {
    /// Create an IoError from an io::Error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            message: message.into(),
            source,
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for PincellError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "Resource not found",
            std::io::ErrorKind::PermissionDenied => "Permission denied",
            std::io::ErrorKind::Interrupted => "Operation interrupted",
            _ => "I/O operation failed",
        };
        Self::IoError {
            message: message.to_string(),
            source: err,
        }
    }
}
