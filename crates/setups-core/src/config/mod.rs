//! Configuration system for setups.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod defaults_config;
pub mod output_config;
pub mod setups_config;

pub use defaults_config::DefaultsConfig;
pub use output_config::OutputConfig;
pub use setups_config::{CliOverrides, SetupsConfig};
