//! Error types for persistence, import, and export
//!
//! All store errors are terminal at their point of origin: callers convert
//! them to a user notification (status bar in the TUI, stderr in the CLI)
//! and leave the previously loaded state untouched. Nothing is retried.

use std::fmt;
use std::io;

/// Errors from the key-value store and the JSON import/export triggers.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing a file failed.
    Io { path: String, source: io::Error },

    /// The document is not valid JSON at all.
    Decode { message: String },

    /// One record in an imported array does not match the question shape.
    InvalidRecord { index: usize, message: String },

    /// A record carries an empty id.
    EmptyId { index: usize },

    /// Two records share an id.
    DuplicateId { index: usize, id: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, source } => {
                write!(f, "File operation failed for '{}': {}", path, source)
            }
            StoreError::Decode { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
            StoreError::InvalidRecord { index, message } => {
                write!(f, "Question {} is malformed: {}", index + 1, message)
            }
            StoreError::EmptyId { index } => {
                write!(f, "Question {} has an empty id", index + 1)
            }
            StoreError::DuplicateId { index, id } => {
                write!(f, "Question {} reuses id '{}'", index + 1, id)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
