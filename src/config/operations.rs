//! Config loading and validation.

use super::model::Config;
use crate::error::{AdwError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(AdwError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AdwError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| AdwError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    #[cfg(test)]
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AdwError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `assistant.command` and `assistant.prompt_flag` must be non-empty
    /// - template names must be non-empty bare names (no path separators)
    /// - `plan_extension` must be non-empty and start with a dot
    pub fn validate(&self) -> Result<()> {
        if self.assistant.command.trim().is_empty() {
            return Err(AdwError::Config(
                "config validation failed: assistant.command must not be empty".to_string(),
            ));
        }

        if self.assistant.prompt_flag.trim().is_empty() {
            return Err(AdwError::Config(
                "config validation failed: assistant.prompt_flag must not be empty".to_string(),
            ));
        }

        validate_template_name("plan_template", &self.plan_template)?;
        validate_template_name("implement_template", &self.implement_template)?;

        if self.plan_extension.len() < 2 || !self.plan_extension.starts_with('.') {
            return Err(AdwError::Config(format!(
                "config validation failed: plan_extension must start with a dot (found '{}'). Use '.{}' instead.",
                self.plan_extension,
                self.plan_extension.trim_start_matches('.')
            )));
        }

        Ok(())
    }
}

/// Check that a template name is a bare file stem.
pub(crate) fn validate_template_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AdwError::Config(format!(
            "config validation failed: {} must not be empty",
            field
        )));
    }

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(AdwError::Config(format!(
            "config validation failed: {} must be a template name, not a path (found '{}')",
            field, name
        )));
    }

    Ok(())
}
