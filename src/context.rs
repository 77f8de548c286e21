//! Run context resolution for dockgen.
//!
//! Every command works from a `RunContext`: the directory relative paths are
//! resolved against and the effective configuration. Commands never read the
//! process working directory themselves, so they can be driven from any
//! directory (and from tests) by constructing a context explicitly.

use crate::config::Config;
use crate::error::{DockgenError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved environment for one dockgen invocation.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Base directory for relative paths (the process working directory).
    pub cwd: PathBuf,

    /// Effective configuration after loading `dockgen.yaml` or `--config`.
    pub config: Config,
}

impl RunContext {
    /// Resolve the context from the current working directory.
    pub fn resolve(config_path: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            DockgenError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd, config_path)
    }

    /// Resolve the context for a specific base directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P, config_path: Option<&Path>) -> Result<Self> {
        let cwd = cwd.as_ref().to_path_buf();
        let config_path = config_path.map(|p| resolve_against(&cwd, p));
        let config = Config::resolve(config_path.as_deref(), &cwd)?;
        Ok(Self::new(cwd, config))
    }

    /// Build a context directly from parts.
    pub fn new(cwd: PathBuf, config: Config) -> Self {
        Self { cwd, config }
    }

    /// Resolve `path` against the base directory unless it is absolute.
    pub fn path(&self, path: impl AsRef<Path>) -> PathBuf {
        resolve_against(&self.cwd, path.as_ref())
    }

    /// Project directory: CLI override, else config.
    pub fn project_dir(&self, cli: Option<&Path>) -> PathBuf {
        match cli {
            Some(p) => self.path(p),
            None => self.path(&self.config.project_dir),
        }
    }

    /// Prompt template path: CLI override, else config.
    pub fn template_path(&self, cli: Option<&Path>) -> PathBuf {
        match cli {
            Some(p) => self.path(p),
            None => self.path(&self.config.template_path),
        }
    }

    /// Dockerfile path: CLI override, else config.
    pub fn output_path(&self, cli: Option<&Path>) -> PathBuf {
        match cli {
            Some(p) => self.path(p),
            None => self.path(&self.config.output_path),
        }
    }
}

fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG_FILE;
    use tempfile::TempDir;

    #[test]
    fn resolve_from_uses_defaults_without_config() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = RunContext::resolve_from(temp_dir.path(), None).unwrap();

        assert_eq!(ctx.cwd, temp_dir.path());
        assert_eq!(ctx.project_dir(None), temp_dir.path().join("sample-app"));
        assert_eq!(
            ctx.template_path(None),
            temp_dir.path().join("prompt_template.txt")
        );
        assert_eq!(ctx.output_path(None), temp_dir.path().join("Dockerfile"));
    }

    #[test]
    fn relative_config_path_is_resolved_against_cwd() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("ci.yaml"), "output_path: out/Dockerfile\n").unwrap();

        let ctx = RunContext::resolve_from(temp_dir.path(), Some(Path::new("ci.yaml"))).unwrap();
        assert_eq!(ctx.output_path(None), temp_dir.path().join("out/Dockerfile"));
    }

    #[test]
    fn implicit_config_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILE), "project_dir: app\n").unwrap();

        let ctx = RunContext::resolve_from(temp_dir.path(), None).unwrap();
        assert_eq!(ctx.project_dir(None), temp_dir.path().join("app"));
    }

    #[test]
    fn cli_overrides_win_and_absolute_paths_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = RunContext::new(temp_dir.path().to_path_buf(), Config::default());

        assert_eq!(
            ctx.project_dir(Some(Path::new("other"))),
            temp_dir.path().join("other")
        );

        let absolute = temp_dir.path().join("abs/Dockerfile");
        assert_eq!(ctx.output_path(Some(&absolute)), absolute);
    }
}
