//! Project context resolution for adw.
//!
//! The project root is explicit configuration: it comes from `--project-root`
//! or, failing that, the current working directory. Every other path the
//! workflow touches (templates, config, plan files, run logs) is derived from
//! it here, so nothing depends on where the binary itself lives.

use crate::config::Config;
use crate::error::{AdwError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Directory holding adw's own state, relative to the project root.
pub const ADW_DIR: &str = ".adw";

/// Config file name inside [`ADW_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

/// Resolved paths for one workflow run. All paths are absolute.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Absolute path to the project root; the assistant runs here.
    pub project_root: PathBuf,

    /// Absolute path to the command templates directory.
    pub commands_dir: PathBuf,

    /// Absolute path to the run log root, if run logging is enabled.
    pub log_dir: Option<PathBuf>,
}

impl ProjectContext {
    /// Build the context for a resolved project root and loaded config.
    pub fn new(project_root: PathBuf, config: &Config) -> Self {
        let commands_dir = project_root.join(&config.commands_dir);
        let log_dir = config.log_dir.as_ref().map(|dir| project_root.join(dir));

        Self {
            project_root,
            commands_dir,
            log_dir,
        }
    }

    /// Path of the template file for `name`.
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.commands_dir.join(format!("{}.md", name))
    }

    /// Run log directory for a single run, if run logging is enabled.
    pub fn run_log_dir(&self, adw_id: &str) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| dir.join(adw_id))
    }
}

/// Resolve the project root from an explicit path or the current directory.
///
/// The result is canonicalized and must be an existing directory.
pub fn resolve_project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let candidate = match explicit {
        Some(path) => path.to_path_buf(),
        None => env::current_dir()
            .map_err(|e| AdwError::io("failed to get current working directory", e))?,
    };

    let root = candidate.canonicalize().map_err(|e| {
        AdwError::Config(format!(
            "project root '{}' is not accessible: {}",
            candidate.display(),
            e
        ))
    })?;

    if !root.is_dir() {
        return Err(AdwError::Config(format!(
            "project root '{}' is not a directory",
            root.display()
        )));
    }

    Ok(root)
}

/// Check that a run identifier can name a single directory under the log root.
pub fn validate_run_id(adw_id: &str) -> Result<()> {
    if adw_id.trim().is_empty() {
        return Err(AdwError::Config("run id must not be empty".to_string()));
    }

    if adw_id.contains('/') || adw_id.contains('\\') || adw_id == "." || adw_id == ".." {
        return Err(AdwError::Config(format!(
            "run id must be a plain name, not a path (found '{}')",
            adw_id
        )));
    }

    Ok(())
}

/// Default config file location for a project root.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(ADW_DIR).join(CONFIG_FILE)
}
