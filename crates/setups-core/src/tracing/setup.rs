//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Default filter when `SETUPS_LOG` is unset or invalid.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "setups=debug,setups_core=debug,setups_cli=debug"
    } else {
        "setups=warn,setups_core=warn,setups_cli=warn"
    }
}

/// Filter from `SETUPS_LOG`, or [`default_filter`] when it is unset or
/// does not parse.
pub fn resolve_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)))
}

/// Initialize the setups tracing/logging system.
///
/// Reads `SETUPS_LOG` for per-module log levels, e.g.
/// `SETUPS_LOG=setups_core::config=debug`. Logs go to stderr so they
/// never interleave with prompts on stdout.
///
/// This function is idempotent.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let filter = resolve_filter(verbose);

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(verbose)
                    .with_line_number(verbose),
            )
            .with(filter)
            .init();
    });
}
