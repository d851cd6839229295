//! Core of the `setups` generator: collects Python project metadata through
//! a [`prompt::Prompter`] and renders it into a `setup.py` script.

pub mod builder;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod descriptor;
pub mod errors;
pub mod prompt;
pub mod render;
pub mod tracing;
pub mod writer;

pub use builder::ProjectDescriptorBuilder;
pub use descriptor::ProjectDescriptor;
