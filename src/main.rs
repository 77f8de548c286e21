//! Dockgen: generate a Dockerfile for a project with a local language model.
//!
//! This is the main entry point for the `dockgen` CLI. It parses arguments,
//! sets up logging, resolves the run context, dispatches to the appropriate
//! command handler, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod clean;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod generator;
pub mod logging;
pub mod prompt;
pub mod scan;
pub mod validate;
pub mod writer;

#[cfg(test)]
mod test_support;

use cli::Cli;
use context::RunContext;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    let result = RunContext::resolve(cli.config.as_deref())
        .and_then(|ctx| commands::dispatch(&ctx, cli.command));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
