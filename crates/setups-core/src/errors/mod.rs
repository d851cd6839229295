//! Error handling for setups.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod build_error;
pub mod config_error;
pub mod error_code;
pub mod prompt_error;
pub mod write_error;

pub use build_error::BuildError;
pub use config_error::ConfigError;
pub use error_code::SetupsErrorCode;
pub use prompt_error::PromptError;
pub use write_error::WriteError;
