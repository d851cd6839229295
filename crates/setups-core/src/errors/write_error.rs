//! Script persistence errors.

use std::path::PathBuf;

use super::error_code::{self, SetupsErrorCode};

/// Errors that can occur while persisting the rendered script.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: &'static str },
}

impl SetupsErrorCode for WriteError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CreateDir { .. } | Self::WriteFile { .. } => error_code::IO_ERROR,
            Self::InvalidProjectName { .. } => error_code::INVALID_PROJECT_NAME,
        }
    }
}
