//! Rendering of a [`crate::ProjectDescriptor`] into `setup.py` text.

pub mod escape;
pub mod template;

pub use escape::{python_list_literal, python_string_literal};
pub use template::render_setup_script;
