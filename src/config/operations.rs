//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{DockgenError, Result};
use crate::scan::build_exclude_set;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DockgenError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&content)
    }

    /// Resolve the effective config for a run.
    ///
    /// An explicit path must exist. Without one, `dockgen.yaml` in `cwd` is
    /// used when present and built-in defaults otherwise.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let implicit = cwd.join(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::load(implicit)
                } else {
                    debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // A blank file means "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| DockgenError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            DockgenError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `scan_depth` must be positive
    /// - `runner_command` must be non-empty
    /// - `scan_exclude` entries must be valid globs
    pub fn validate(&self) -> Result<()> {
        if self.scan_depth == 0 {
            return Err(DockgenError::UserError(
                "config validation failed: scan_depth must be greater than 0".to_string(),
            ));
        }

        if self.runner_command.trim().is_empty() {
            return Err(DockgenError::UserError(
                "config validation failed: runner_command must not be empty".to_string(),
            ));
        }

        build_exclude_set(&self.scan_exclude).map_err(|e| {
            DockgenError::UserError(format!("config validation failed: {}", e))
        })?;

        Ok(())
    }
}
