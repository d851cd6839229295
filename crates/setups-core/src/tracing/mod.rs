//! Observability for setups.
//! `tracing` crate with `EnvFilter`, output on stderr.

pub mod fields;
pub mod setup;

pub use setup::init_tracing;
