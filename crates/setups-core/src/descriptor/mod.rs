//! The project descriptor and its field normalizers.

pub mod list;
pub mod project;

pub use list::parse_comma_list;
pub use project::ProjectDescriptor;
