//! Error types for transchunk operations.
//!
//! Splitting and diffing are total; errors only arise from splitter
//! configuration, file I/O, document assembly, and CLI command handling.

use thiserror::Error;

/// Result type alias for transchunk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Splitting-related errors (strategy selection and configuration).
    #[error("split error: {0}")]
    Split(#[from] SplitError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Translation document errors.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
}

/// Errors raised while configuring or selecting a splitter.
#[derive(Error, Debug)]
pub enum SplitError {
    /// Invalid splitter configuration.
    #[error("invalid split configuration: {reason}")]
    InvalidConfig {
        /// Reason the configuration is invalid.
        reason: String,
    },

    /// Unknown splitting strategy.
    #[error("unknown split strategy: {name}")]
    UnknownStrategy {
        /// Name of the unknown strategy.
        name: String,
    },
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
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

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while assembling or editing a translation document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// No chunk carries a final translation yet.
    #[error("document has no translated chunks to finalize")]
    NothingToFinalize,

    /// Some chunks are still untranslated.
    #[error("{missing} of {total} chunks have no final translation")]
    Unfinished {
        /// Number of untranslated chunks.
        missing: usize,
        /// Total number of chunks.
        total: usize,
    },

    /// The edit list does not line up with the chunk list.
    #[error("expected {expected} edited chunks, got {actual}")]
    EditCountMismatch {
        /// Number of chunks in the document.
        expected: usize,
        /// Number of edits supplied.
        actual: usize,
    },

    /// Document JSON could not be parsed or rendered.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Document(DocumentError::from(err))
    }
}
