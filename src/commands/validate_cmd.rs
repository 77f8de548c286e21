//! Implementation of the `dockgen validate` command.
//!
//! Checks an existing Dockerfile's COPY sources against a project directory.
//! Missing sources are warnings unless `--strict` is given.

use super::generate::print_missing;
use crate::cli::ValidateArgs;
use crate::context::RunContext;
use crate::error::{DockgenError, Result};
use crate::validate::validate_copy_paths;
use std::path::PathBuf;

/// Execute the `dockgen validate` command.
pub fn cmd_validate(ctx: &RunContext, args: ValidateArgs) -> Result<()> {
    let missing = find_missing(ctx, &args)?;

    if args.json {
        println!("{}", render_json(&missing)?);
    } else if missing.is_empty() {
        println!("All COPY sources exist.");
    } else {
        print_missing(&missing);
    }

    if args.strict && !missing.is_empty() {
        return Err(DockgenError::ValidationError(format!(
            "{} COPY source path(s) do not exist",
            missing.len()
        )));
    }

    Ok(())
}

/// Missing paths as a pretty-printed JSON array of strings.
pub(crate) fn render_json(missing: &[PathBuf]) -> Result<String> {
    let paths: Vec<String> = missing.iter().map(|p| p.display().to_string()).collect();
    serde_json::to_string_pretty(&paths)
        .map_err(|e| DockgenError::UserError(format!("failed to serialize report: {}", e)))
}

pub(crate) fn find_missing(ctx: &RunContext, args: &ValidateArgs) -> Result<Vec<PathBuf>> {
    let dockerfile_path = ctx.output_path(args.dockerfile.as_deref());
    let project_dir = ctx.project_dir(args.project_dir.as_deref());

    let dockerfile = std::fs::read_to_string(&dockerfile_path).map_err(|e| {
        DockgenError::UserError(format!(
            "failed to read Dockerfile '{}': {}",
            dockerfile_path.display(),
            e
        ))
    })?;

    Ok(validate_copy_paths(&dockerfile, &project_dir))
}
