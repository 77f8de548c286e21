//! Implementation of the `dockgen tree` and `dockgen prompt` commands.
//!
//! Both show what `generate` would send to the model without running it.

use crate::cli::{PromptArgs, TreeArgs};
use crate::context::RunContext;
use crate::error::Result;
use crate::prompt::{build_prompt, load_template};
use crate::scan::{ScanOptions, scan_project};

/// Execute the `dockgen tree` command.
pub fn cmd_tree(ctx: &RunContext, args: TreeArgs) -> Result<()> {
    println!("{}", render_tree(ctx, &args)?);
    Ok(())
}

/// Execute the `dockgen prompt` command.
pub fn cmd_prompt(ctx: &RunContext, args: PromptArgs) -> Result<()> {
    println!("{}", render_prompt(ctx, &args)?);
    Ok(())
}

pub(crate) fn render_tree(ctx: &RunContext, args: &TreeArgs) -> Result<String> {
    let mut options = ScanOptions::from(&ctx.config);
    if let Some(depth) = args.depth {
        options.max_depth = depth;
    }

    scan_project(&ctx.project_dir(args.project_dir.as_deref()), &options)
}

pub(crate) fn render_prompt(ctx: &RunContext, args: &PromptArgs) -> Result<String> {
    let inputs = &args.inputs;
    let structure = scan_project(
        &ctx.project_dir(inputs.project_dir.as_deref()),
        &ScanOptions::from(&ctx.config),
    )?;
    let template = load_template(&ctx.template_path(inputs.template.as_deref()))?;
    let description = inputs
        .description
        .as_deref()
        .unwrap_or(&ctx.config.description);

    build_prompt(&template, description, &structure)
}
