//! Persists the rendered script under `<output_root>/<project_name>/setup.py`.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::constants::SETUP_FILE_NAME;
use crate::errors::WriteError;
use crate::tracing::fields::{BYTES, PATH};

/// Writes rendered scripts below a fixed output root.
#[derive(Debug, Clone)]
pub struct ScriptWriter {
    output_root: PathBuf,
}

impl ScriptWriter {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// Resolves the project directory without touching the filesystem.
    ///
    /// The name is joined onto the output root as given: nested names
    /// create parents, `..` climbs out of the root, and an absolute name
    /// replaces the root entirely. Only the empty name is rejected.
    pub fn project_dir(&self, project_name: &str) -> Result<PathBuf, WriteError> {
        if project_name.is_empty() {
            return Err(WriteError::InvalidProjectName {
                name: project_name.to_string(),
                reason: "must not be empty",
            });
        }
        Ok(self.output_root.join(project_name))
    }

    /// Creates the project directory (and parents) if needed, then writes
    /// `setup.py`, replacing any existing file. Returns the script path.
    ///
    /// No cleanup happens on failure: a directory created before a failed
    /// write stays behind.
    pub fn write(&self, project_name: &str, contents: &str) -> Result<PathBuf, WriteError> {
        let dir = self.project_dir(project_name)?;

        if !dir.is_dir() {
            debug!({ PATH } = %dir.display(), "creating project directory");
        }
        fs::create_dir_all(&dir).map_err(|source| WriteError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let script_path = dir.join(SETUP_FILE_NAME);
        fs::write(&script_path, contents).map_err(|source| WriteError::WriteFile {
            path: script_path.clone(),
            source,
        })?;

        info!(
            { PATH } = %script_path.display(),
            { BYTES } = contents.len(),
            "wrote setup script"
        );
        Ok(script_path)
    }
}
