//! The fixed `setup.py` template.
//!
//! Slot names and the `setup(...)` keyword structure are what packaging
//! tooling consumes; keep them stable.

use tracing::debug;

use super::escape::{python_list_literal, python_string_literal as lit};
use crate::descriptor::ProjectDescriptor;
use crate::tracing::fields::{BYTES, PROJECT};

/// Renders the complete `setup.py` text for `descriptor`.
pub fn render_setup_script(descriptor: &ProjectDescriptor) -> String {
    let classifiers = descriptor
        .classifier_list()
        .iter()
        .map(|c| format!("        {},\n", lit(c)))
        .collect::<String>();

    let script = format!(
        r#"from setuptools import setup, find_packages

VERSION = {version}  # Version of your package
DESCRIPTION = {description}  # Short description

# Long description of the project (can be pulled from README.md)
LONG_DESCRIPTION = {long_description}

setup(
    name={name},  # Name of your package
    version=VERSION,  # Package version
    author={author},  # Author name
    author_email={author_email},  # Author's email
    description=DESCRIPTION,  # Short description
    long_description=LONG_DESCRIPTION,  # Detailed description
    long_description_content_type="text/markdown",  # Format of the long description
    url={source_url},  # URL to the project's source
    packages=find_packages(),  # Automatically find all packages in the directory
    classifiers=[  # List of classifiers to categorize your package
{classifiers}    ],
    python_requires={python_requires},  # Minimum Python version required
    install_requires={install_requires},  # List of dependencies
    setup_requires=["pytest-runner"],  # For running tests during installation
    tests_require={tests_require},  # Dependencies needed for running tests
    license={license},  # License under which the project is released
    project_urls={{  # Additional URLs related to your project
        "Source Code": {source_url},
        "Bug Tracker": {bug_tracker_url},
        "Documentation": {documentation_url},
    }},
)
"#,
        version = lit(&descriptor.version),
        description = lit(&descriptor.description),
        long_description = lit(&descriptor.long_description),
        name = lit(&descriptor.name),
        author = lit(&descriptor.author),
        author_email = lit(&descriptor.author_email),
        source_url = lit(&descriptor.source_url),
        classifiers = classifiers,
        python_requires = lit(&format!(">={}", descriptor.python_requires)),
        install_requires = python_list_literal(&descriptor.dependencies),
        tests_require = python_list_literal(&descriptor.test_dependencies),
        license = lit(descriptor.license.as_str()),
        bug_tracker_url = lit(&descriptor.bug_tracker_url),
        documentation_url = lit(&descriptor.documentation_url),
    );

    debug!(
        { PROJECT } = %descriptor.name,
        { BYTES } = script.len(),
        "rendered setup script"
    );
    script
}
