//! Implementation of the `dockgen init` command.
//!
//! Scaffolds the two files a first `generate` run needs: the prompt template
//! and a `dockgen.yaml` holding every default. Existing files are left alone
//! unless `--force` is given.

use crate::cli::InitArgs;
use crate::config::DEFAULT_CONFIG_FILE;
use crate::context::RunContext;
use crate::error::Result;
use crate::prompt::DEFAULT_TEMPLATE;
use crate::writer::atomic_write;
use std::path::PathBuf;
use tracing::debug;

/// Execute the `dockgen init` command.
pub fn cmd_init(ctx: &RunContext, args: InitArgs) -> Result<()> {
    for (path, created) in scaffold(ctx, args.force)? {
        if created {
            println!("Created {}", path.display());
        } else {
            println!("Kept existing {} (use --force to overwrite)", path.display());
        }
    }
    Ok(())
}

/// Write the template and config. Returns each path and whether it was written.
pub(crate) fn scaffold(ctx: &RunContext, force: bool) -> Result<Vec<(PathBuf, bool)>> {
    let template_path = ctx.template_path(None);
    let config_path = ctx.path(DEFAULT_CONFIG_FILE);
    let config_yaml = ctx.config.to_yaml()?;

    Ok(vec![
        write_unless_exists(template_path, DEFAULT_TEMPLATE, force)?,
        write_unless_exists(config_path, &config_yaml, force)?,
    ])
}

fn write_unless_exists(path: PathBuf, content: &str, force: bool) -> Result<(PathBuf, bool)> {
    if path.exists() && !force {
        debug!(path = %path.display(), "file exists, not overwriting");
        return Ok((path, false));
    }

    atomic_write(&path, content.as_bytes())?;
    Ok((path, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::prompt::load_template;
    use std::fs;
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir) -> RunContext {
        RunContext::new(temp_dir.path().to_path_buf(), Config::default())
    }

    #[test]
    fn creates_template_and_config() {
        let temp_dir = TempDir::new().unwrap();
        let results = scaffold(&context(&temp_dir), false).unwrap();

        assert!(results.iter().all(|(_, created)| *created));

        let template = load_template(&temp_dir.path().join("prompt_template.txt")).unwrap();
        assert_eq!(template, DEFAULT_TEMPLATE);

        let config = Config::load(temp_dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn keeps_existing_files_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let template_path = temp_dir.path().join("prompt_template.txt");
        fs::write(&template_path, "custom {file_structure}").unwrap();

        let results = scaffold(&context(&temp_dir), false).unwrap();

        assert_eq!(results[0], (template_path.clone(), false));
        assert!(results[1].1);
        assert_eq!(fs::read_to_string(template_path).unwrap(), "custom {file_structure}");
    }

    #[test]
    fn force_overwrites_existing_files() {
        let temp_dir = TempDir::new().unwrap();
        let template_path = temp_dir.path().join("prompt_template.txt");
        fs::write(&template_path, "custom").unwrap();

        scaffold(&context(&temp_dir), true).unwrap();
        assert_eq!(fs::read_to_string(template_path).unwrap(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn scaffolded_config_reflects_loaded_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            model: "codellama".to_string(),
            ..Default::default()
        };
        let ctx = RunContext::new(temp_dir.path().to_path_buf(), config);

        scaffold(&ctx, false).unwrap();

        let written = Config::load(temp_dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(written.model, "codellama");
    }
}
