//! Implementation of the `dockgen clean` command.

use crate::clean::clean_output;
use crate::cli::CleanArgs;
use crate::context::RunContext;
use crate::error::{DockgenError, Result};
use std::io::Read;

/// Execute the `dockgen clean` command.
///
/// Reads raw model output from a file or stdin and prints the cleaned text.
pub fn cmd_clean(ctx: &RunContext, args: CleanArgs) -> Result<()> {
    let raw = read_input(ctx, &args)?;
    println!("{}", clean_output(&raw));
    Ok(())
}

/// Raw text from the input file (resolved against the context) or stdin.
pub(crate) fn read_input(ctx: &RunContext, args: &CleanArgs) -> Result<String> {
    match &args.input {
        Some(path) => {
            let path = ctx.path(path);
            std::fs::read_to_string(&path).map_err(|e| {
                DockgenError::UserError(format!(
                    "failed to read input file '{}': {}",
                    path.display(),
                    e
                ))
            })
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| DockgenError::UserError(format!("failed to read stdin: {}", e)))?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn missing_input_file_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = RunContext::new(temp_dir.path().to_path_buf(), Config::default());
        let args = CleanArgs {
            input: Some(PathBuf::from("reply.md")),
        };

        let err = cmd_clean(&ctx, args).unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
        assert!(err.to_string().contains("reply.md"));
    }

    #[test]
    fn input_file_is_read_relative_to_cwd() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("reply.md"), "```\nFROM alpine\n```").unwrap();
        let ctx = RunContext::new(temp_dir.path().to_path_buf(), Config::default());
        let args = CleanArgs {
            input: Some(PathBuf::from("reply.md")),
        };

        let raw = read_input(&ctx, &args).unwrap();
        assert_eq!(raw, "```\nFROM alpine\n```");
        assert_eq!(clean_output(&raw), "FROM alpine");
        assert!(cmd_clean(&ctx, args).is_ok());
    }
}
