//! # Loader Error Types
//!
//! Error types for reading and parsing cart files.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error ──────────► EmptyPath / FileNotFound / ReadFailed       │
//! │                                                                         │
//! │  Vec<ValidationError> ────► ValidationFailed (whole batch)             │
//! │   (non-empty)                                                           │
//! │                                                                         │
//! │  CoreError ───────────────► Core (EmptyContent, InvalidSchema, ...)    │
//! │                                                                         │
//! │  toml errors ─────────────► ConfigLoadFailed / ConfigSaveFailed        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cart_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors from the loader layer.
#[derive(Debug, Error)]
pub enum LoaderError {
    // =========================================================================
    // I/O Errors
    // =========================================================================
    /// No path given.
    #[error("File path is empty")]
    EmptyPath,

    /// Path doesn't resolve to a file.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Path exists but can't be read as UTF-8 text.
    ///
    /// ## When This Occurs
    /// - Path is a directory
    /// - Permission denied
    /// - File isn't valid UTF-8
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    // =========================================================================
    // Document Errors
    // =========================================================================
    /// The document has one or more defects. Carries all of them.
    #[error("Validation failed with {} error(s)", .0.len())]
    ValidationFailed(Vec<ValidationError>),

    /// Core operation failed (empty content, malformed line, bad schema).
    #[error(transparent)]
    Core(#[from] CoreError),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Schema config file couldn't be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Schema config couldn't be written.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}

impl LoaderError {
    /// Creates a ReadFailed error.
    pub fn read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        LoaderError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from reading the input file.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            LoaderError::EmptyPath | LoaderError::FileNotFound(_) | LoaderError::ReadFailed { .. }
        )
    }

    /// The validation errors, if this is a rejected document.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            LoaderError::ValidationFailed(errors) => Some(errors.as_slice()),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for LoaderError {
    fn from(err: toml::de::Error) -> Self {
        LoaderError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for LoaderError {
    fn from(err: toml::ser::Error) -> Self {
        LoaderError::ConfigSaveFailed(err.to_string())
    }
}

/// Result type for loader operations.
pub type LoaderResult<T> = Result<T, LoaderError>;
