//! Error types for cfgedit-core

use std::path::PathBuf;

/// Result type for cfgedit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cfgedit-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not open '{path}' for reading: file not found")]
    FileNotFound { path: PathBuf },

    #[error("Cannot create {path} because it already exists")]
    AlreadyExists { path: PathBuf },

    #[error("Variable name '{name}' does not match '[A-Z_][A-Z0-9_]*'")]
    InvalidName { name: String },

    #[error("Variable '{name}' not found")]
    NotFound { name: String },

    #[error("Malformed value '{value}': {reason}")]
    MalformedValue { value: String, reason: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedValue {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}
