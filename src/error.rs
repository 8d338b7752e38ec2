//! Error types for stim-url operations.
//!
//! The encoder itself cannot fail; everything here comes from reading input
//! or from command-line handling.

use thiserror::Error;

/// Result type alias for stim-url operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors (reading circuit text).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// I/O-specific errors for reading circuit text.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file or stream.
    #[error("failed to read {path}: {reason}")]
    ReadFailed {
        /// Path to the file, or `<stdin>`.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Writing the result failed.
    #[error("failed to write output: {0}")]
    OutputFailed(String),
}
