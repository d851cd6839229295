//! Shared constants for the setups generator.

/// Default package version offered at the version prompt.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Default license identifier offered at the license prompt.
pub const DEFAULT_LICENSE: &str = "MIT";

/// Default minimum Python version.
pub const DEFAULT_PYTHON_VERSION: &str = "3.8";

/// Default output root, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Name of the generated script inside the project directory.
pub const SETUP_FILE_NAME: &str = "setup.py";

/// Project-level config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "setups.toml";

/// User-level config directory name under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".setups";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "SETUPS_LOG";
