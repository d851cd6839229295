//! `setups` - interactively generate a `setup.py` for a new Python project.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use setups_core::config::SetupsConfig;
use setups_core::errors::{BuildError, ConfigError, SetupsErrorCode};
use setups_core::prompt::LinePrompter;
use setups_core::tracing::init_tracing;
use setups_core::ProjectDescriptorBuilder;
use tracing::{debug, error};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.error_code(), "generation failed");
            eprintln!("error: {}", e.diagnostic());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), BuildError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::InvalidValue {
        field: "working directory".to_string(),
        message: e.to_string(),
    })?;
    let config = SetupsConfig::load(&cwd, cli.config.as_deref(), Some(&cli.overrides()))?;
    debug!(output = %config.output.effective_dir().display(), "starting generator");

    let mut builder = ProjectDescriptorBuilder::with_config(LinePrompter::stdio(), config);
    builder.build_and_write(&cli.project_name)?;
    Ok(())
}
