//! Error types for cfgedit-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from cfgedit-core
    #[error(transparent)]
    Core(#[from] cfgedit_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The allow-list file could not be read or parsed
    #[error("Invalid allow-list {path}: {message}")]
    AllowList { path: PathBuf, message: String },

    /// A mutating command targeted a file outside the allow-list
    #[error(
        "Invalid attempt to edit '{path}'. This tool may only edit the following files: {}",
        format_allowed(.allowed)
    )]
    NotAllowed { path: PathBuf, allowed: Vec<PathBuf> },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

fn format_allowed(allowed: &[PathBuf]) -> String {
    if allowed.is_empty() {
        return "(none)".to_string();
    }
    allowed
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
