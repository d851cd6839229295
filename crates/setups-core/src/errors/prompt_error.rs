//! Prompt errors.

use super::error_code::{self, SetupsErrorCode};

/// Errors raised while talking to the prompter.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed while waiting for '{prompt}'")]
    InputClosed { prompt: String },

    #[error("'{value}' is not one of {}", .choices.join(", "))]
    InvalidChoice { value: String, choices: Vec<String> },
}

impl SetupsErrorCode for PromptError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => error_code::PROMPT_ERROR,
            Self::InputClosed { .. } => error_code::INPUT_CLOSED,
            Self::InvalidChoice { .. } => error_code::INVALID_CHOICE,
        }
    }
}
