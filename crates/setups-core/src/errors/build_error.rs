//! Top-level error for a generator run.

use super::error_code::SetupsErrorCode;
use super::{ConfigError, PromptError, WriteError};

/// Errors that terminate a run. Aggregates subsystem errors via `From`.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SetupsErrorCode for BuildError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Prompt(e) => e.error_code(),
            Self::Write(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
