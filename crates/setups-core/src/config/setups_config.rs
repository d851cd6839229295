//! Top-level setups configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{DefaultsConfig, OutputConfig};
use crate::catalog::License;
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;
use crate::tracing::fields::PATH;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SETUPS_*`)
/// 3. Explicit config file, else `setups.toml` in the working directory
/// 4. User config (`~/.setups/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SetupsConfig {
    pub defaults: DefaultsConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub default_version: Option<String>,
    pub default_license: Option<String>,
    pub default_python: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl SetupsConfig {
    /// Load configuration with layered resolution.
    ///
    /// `explicit` replaces the project config lookup and must exist.
    pub fn load(
        root: &Path,
        explicit: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        warn!(
                            { PATH } = %user_config_path.display(),
                            error = %e,
                            "ignoring user config"
                        );
                    }
                }
            }
        }

        // Layer 3: explicit or project config
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, path)?;
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        debug!(?config, "configuration resolved");

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SetupsConfig) -> Result<(), ConfigError> {
        if let Some(ref license) = config.defaults.license {
            if let Err(e) = license.parse::<License>() {
                return Err(ConfigError::ValidationFailed {
                    field: "defaults.license".to_string(),
                    message: e.to_string(),
                });
            }
        }
        for (field, value) in [
            ("defaults.version", &config.defaults.version),
            ("defaults.python_requires", &config.defaults.python_requires),
        ] {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if matches!(config.output.dir, Some(ref d) if d.as_os_str().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "output.dir".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.setups/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SetupsConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SetupsConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        debug!({ PATH } = %path.display(), "merged config file");
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut SetupsConfig, other: &SetupsConfig) {
        // Defaults
        if other.defaults.version.is_some() {
            base.defaults.version = other.defaults.version.clone();
        }
        if other.defaults.license.is_some() {
            base.defaults.license = other.defaults.license.clone();
        }
        if other.defaults.python_requires.is_some() {
            base.defaults.python_requires = other.defaults.python_requires.clone();
        }
        if other.defaults.author.is_some() {
            base.defaults.author = other.defaults.author.clone();
        }
        if other.defaults.author_email.is_some() {
            base.defaults.author_email = other.defaults.author_email.clone();
        }

        // Output
        if other.output.dir.is_some() {
            base.output.dir = other.output.dir.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SETUPS_DEFAULT_VERSION`, `SETUPS_OUTPUT_DIR`, etc.
    fn apply_env_overrides(config: &mut SetupsConfig) {
        if let Ok(val) = std::env::var("SETUPS_DEFAULT_VERSION") {
            config.defaults.version = Some(val);
        }
        if let Ok(val) = std::env::var("SETUPS_DEFAULT_LICENSE") {
            config.defaults.license = Some(val);
        }
        if let Ok(val) = std::env::var("SETUPS_DEFAULT_PYTHON") {
            config.defaults.python_requires = Some(val);
        }
        if let Ok(val) = std::env::var("SETUPS_DEFAULT_AUTHOR") {
            config.defaults.author = Some(val);
        }
        if let Ok(val) = std::env::var("SETUPS_DEFAULT_AUTHOR_EMAIL") {
            config.defaults.author_email = Some(val);
        }
        if let Some(val) = std::env::var_os("SETUPS_OUTPUT_DIR") {
            config.output.dir = Some(PathBuf::from(val));
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SetupsConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.default_version {
            config.defaults.version = Some(v.clone());
        }
        if let Some(ref v) = cli.default_license {
            config.defaults.license = Some(v.clone());
        }
        if let Some(ref v) = cli.default_python {
            config.defaults.python_requires = Some(v.clone());
        }
        if let Some(ref v) = cli.output_dir {
            config.output.dir = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
