//! ProjectDescriptor: everything the user told us about the project.

use crate::catalog::{ClassifierSelection, License};
use crate::constants::{DEFAULT_PYTHON_VERSION, DEFAULT_VERSION};

/// In-memory record of the collected project metadata.
///
/// Built once per run, rendered once, then dropped. The license is a
/// [`License`], so a descriptor can only hold an allow-listed identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    pub long_description: String,
    pub author: String,
    pub author_email: String,
    pub license: License,
    pub python_requires: String,
    pub dependencies: Vec<String>,
    pub test_dependencies: Vec<String>,
    pub source_url: String,
    pub bug_tracker_url: String,
    pub documentation_url: String,
    pub classifiers: ClassifierSelection,
}

impl ProjectDescriptor {
    /// A descriptor with every defaulted field at its compiled default and
    /// every free-text field empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: DEFAULT_VERSION.to_string(),
            description: String::new(),
            long_description: String::new(),
            author: String::new(),
            author_email: String::new(),
            license: License::default(),
            python_requires: DEFAULT_PYTHON_VERSION.to_string(),
            dependencies: Vec::new(),
            test_dependencies: Vec::new(),
            source_url: String::new(),
            bug_tracker_url: String::new(),
            documentation_url: String::new(),
            classifiers: ClassifierSelection::default(),
        }
    }

    /// Full classifier list as written into `classifiers=[...]`.
    pub fn classifier_list(&self) -> Vec<String> {
        let mut list = self.classifiers.trove_strings();
        list.push(format!("License :: OSI Approved :: {}", self.license));
        list.push("Operating System :: OS Independent".to_string());
        list
    }
}
