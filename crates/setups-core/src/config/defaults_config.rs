//! Prompt default configuration.

use serde::{Deserialize, Serialize};

use crate::catalog::License;
use crate::constants::{DEFAULT_PYTHON_VERSION, DEFAULT_VERSION};

/// Values offered as prompt defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Package version default. Default: "0.1.0".
    pub version: Option<String>,
    /// License identifier default; must be on the allow-list. Default: "MIT".
    pub license: Option<String>,
    /// Minimum Python version default. Default: "3.8".
    pub python_requires: Option<String>,
    /// Author name default. No default.
    pub author: Option<String>,
    /// Author email default. No default.
    pub author_email: Option<String>,
}

impl DefaultsConfig {
    pub fn effective_version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_VERSION)
    }

    /// Returns the configured license, or MIT when unset or not allow-listed.
    pub fn effective_license(&self) -> License {
        self.license
            .as_deref()
            .and_then(|l| l.parse().ok())
            .unwrap_or_default()
    }

    pub fn effective_python_requires(&self) -> &str {
        self.python_requires
            .as_deref()
            .unwrap_or(DEFAULT_PYTHON_VERSION)
    }
}
