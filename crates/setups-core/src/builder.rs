//! ProjectDescriptorBuilder: prompt, validate, normalize, render, persist.

use std::path::PathBuf;

use tracing::{debug, info, info_span};

use crate::catalog::{ClassifierCategory, License};
use crate::config::SetupsConfig;
use crate::descriptor::{parse_comma_list, ProjectDescriptor};
use crate::errors::{BuildError, PromptError};
use crate::prompt::Prompter;
use crate::render::render_setup_script;
use crate::tracing::fields::{LICENSE, LICENSE_ATTEMPTS, PROJECT};
use crate::writer::ScriptWriter;

/// Drives one interactive generator run against a [`Prompter`].
pub struct ProjectDescriptorBuilder<P> {
    prompter: P,
    config: SetupsConfig,
    writer: ScriptWriter,
}

impl<P: Prompter> ProjectDescriptorBuilder<P> {
    /// Builder with compiled defaults, writing below the working directory.
    pub fn new(prompter: P) -> Self {
        Self::with_config(prompter, SetupsConfig::default())
    }

    /// Builder whose prompt defaults and output root come from `config`.
    pub fn with_config(prompter: P, config: SetupsConfig) -> Self {
        let writer = ScriptWriter::new(config.output.effective_dir());
        Self {
            prompter,
            config,
            writer,
        }
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Collects the descriptor, renders it, and writes
    /// `<output_root>/<project_name>/setup.py`. Returns the script path.
    pub fn build_and_write(&mut self, project_name: &str) -> Result<PathBuf, BuildError> {
        let span = info_span!("build_and_write", { PROJECT } = project_name);
        let _guard = span.enter();

        // Reject an empty name before asking anything.
        self.writer.project_dir(project_name)?;

        self.prompter.say("Generating setup.py...")?;
        let descriptor = self.collect(project_name)?;
        let script = render_setup_script(&descriptor);
        let path = self.writer.write(project_name, &script)?;

        self.prompter.say(&format!(
            "setup.py has been successfully generated for project '{project_name}'."
        ))?;
        Ok(path)
    }

    /// Runs every prompt in order and returns the finished descriptor.
    pub fn collect(&mut self, project_name: &str) -> Result<ProjectDescriptor, PromptError> {
        let defaults = self.config.defaults.clone();
        let mut descriptor = ProjectDescriptor::new(project_name);

        descriptor.version = self
            .prompter
            .ask("Version (e.g., 0.1.0)", Some(defaults.effective_version()))?;
        descriptor.description = self.prompter.ask("Short project description", None)?;
        descriptor.long_description = self
            .prompter
            .ask("Long description (use content from your README.md)", None)?;
        descriptor.author = self
            .prompter
            .ask("Author name", defaults.author.as_deref())?;
        descriptor.author_email = self
            .prompter
            .ask("Author email", defaults.author_email.as_deref())?;

        descriptor.license = self.prompt_license(defaults.effective_license())?;

        descriptor.python_requires = self.prompter.ask(
            "Minimum Python version required (e.g., 3.8)",
            Some(defaults.effective_python_requires()),
        )?;

        descriptor.dependencies =
            self.prompt_list("Comma-separated list of dependencies (leave empty for none)")?;
        descriptor.test_dependencies = self
            .prompt_list("Comma-separated list of test dependencies (leave empty for none)")?;

        descriptor.source_url = self.prompter.ask("Project URL (e.g., GitHub URL)", None)?;
        descriptor.bug_tracker_url = self.prompter.ask("Bug tracker URL", None)?;
        descriptor.documentation_url = self.prompter.ask("Documentation URL", None)?;

        for category in ClassifierCategory::PROMPT_ORDER {
            self.prompter.say(category.hint())?;
            let value = self.prompter.choose(
                category.label(),
                category.choices(),
                category.default_choice(),
            )?;
            descriptor.classifiers.set(category, value);
        }

        debug!(
            dependencies = descriptor.dependencies.len(),
            test_dependencies = descriptor.test_dependencies.len(),
            { LICENSE } = %descriptor.license,
            "descriptor collected"
        );
        Ok(descriptor)
    }

    /// Re-asks until the answer is on the license allow-list.
    fn prompt_license(&mut self, default: License) -> Result<License, PromptError> {
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let answer = self.prompter.ask(
                "License type (e.g., MIT, Apache-2.0, GPL-3.0, BSD-3-Clause, etc.)",
                Some(default.as_str()),
            )?;
            match answer.parse::<License>() {
                Ok(license) => {
                    info!(
                        { LICENSE } = %license,
                        { LICENSE_ATTEMPTS } = attempts,
                        "license accepted"
                    );
                    break Ok(license);
                }
                Err(e) => {
                    debug!(value = %answer, "rejected license");
                    self.prompter.say(&e.to_string())?;
                }
            }
        }
    }

    fn prompt_list(&mut self, prompt: &str) -> Result<Vec<String>, PromptError> {
        let raw = self.prompter.ask(prompt, None)?;
        Ok(parse_comma_list(&raw))
    }
}
