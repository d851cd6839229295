//! Command-line surface.

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use setups_core::config::CliOverrides;

/// Setups - dynamically generate setup.py for Python projects
#[derive(Parser, Debug)]
#[command(
    name = "setups",
    version,
    about = "Interactively generate a setup.py for a new Python project",
    long_about = "Asks for the project's metadata (version, author, license, dependencies, \
                  classifiers, URLs) and writes <PROJECT_NAME>/setup.py, replacing any \
                  existing file.\n\n\
                  Prompt defaults can be set in ~/.setups/config.toml, ./setups.toml, \
                  or SETUPS_* environment variables."
)]
pub struct Cli {
    /// Name of the project; also the directory the script is written into
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub project_name: String,

    /// Configuration file path (replaces ./setups.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory under which the project directory is created
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Default offered at the version prompt
    #[arg(long, value_name = "VERSION")]
    pub default_version: Option<String>,

    /// Default offered at the license prompt (must be a valid identifier)
    #[arg(long, value_name = "LICENSE")]
    pub default_license: Option<String>,

    /// Default offered at the minimum Python version prompt
    #[arg(long, value_name = "VERSION")]
    pub default_python: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            default_version: self.default_version.clone(),
            default_license: self.default_license.clone(),
            default_python: self.default_python.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}
