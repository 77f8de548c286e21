//! Command implementations for dockgen.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command receives the resolved `RunContext`.

mod clean_cmd;
mod generate;
mod init;
mod inspect;
mod validate_cmd;

use crate::cli::Command;
use crate::context::RunContext;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(ctx: &RunContext, command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(ctx, args),
        Command::Tree(args) => inspect::cmd_tree(ctx, args),
        Command::Prompt(args) => inspect::cmd_prompt(ctx, args),
        Command::Clean(args) => clean_cmd::cmd_clean(ctx, args),
        Command::Validate(args) => validate_cmd::cmd_validate(ctx, args),
        Command::Init(args) => init::cmd_init(ctx, args),
    }
}
