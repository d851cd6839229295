//! SetupsErrorCode trait for process-boundary diagnostics.

/// Every error enum implements this so the binary can print a stable
/// code next to the human-readable message.
pub trait SetupsErrorCode {
    /// Returns the error code string (e.g., "IO_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic: `[ERROR_CODE] message`.
    fn diagnostic(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PROMPT_ERROR: &str = "PROMPT_ERROR";
pub const INPUT_CLOSED: &str = "INPUT_CLOSED";
pub const INVALID_CHOICE: &str = "INVALID_CHOICE";
pub const IO_ERROR: &str = "IO_ERROR";
pub const INVALID_PROJECT_NAME: &str = "INVALID_PROJECT_NAME";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
