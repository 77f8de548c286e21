//! CLI argument parsing for dockgen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dockgen: generate a Dockerfile for a project with a local language model.
///
/// The project tree and a description are rendered into a prompt template,
/// piped to the model runner (`ollama run <model>` by default), and the
/// reply is cleaned, checked, and saved.
#[derive(Parser, Debug)]
#[command(name = "dockgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./dockgen.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for dockgen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a Dockerfile for a project.
    ///
    /// Scans the project, builds the prompt, runs the model, cleans the reply,
    /// warns about missing COPY sources, and writes the result.
    Generate(GenerateArgs),

    /// Print the project structure listing sent to the model.
    Tree(TreeArgs),

    /// Print the rendered prompt without running the model.
    Prompt(PromptArgs),

    /// Strip markdown and explanations from model output.
    ///
    /// Reads from a file, or stdin when no file is given.
    Clean(CleanArgs),

    /// Check that COPY sources in a Dockerfile exist.
    Validate(ValidateArgs),

    /// Write the default prompt template and config file.
    Init(InitArgs),
}

/// Inputs shared by commands that build a prompt.
#[derive(Parser, Debug, Default)]
pub struct PromptInputs {
    /// Project directory to scan (default from config: sample-app).
    pub project_dir: Option<PathBuf>,

    /// Free-text description of the project.
    #[arg(short, long)]
    pub description: Option<String>,

    /// Prompt template file.
    #[arg(short, long)]
    pub template: Option<PathBuf>,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub inputs: PromptInputs,

    /// Model identifier passed to the runner.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Output Dockerfile path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Runner command template, e.g. "ollama run {model}".
    #[arg(long)]
    pub runner: Option<String>,

    /// Print the cleaned Dockerfile instead of writing it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `tree` command.
#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Project directory to scan.
    pub project_dir: Option<PathBuf>,

    /// Maximum depth to list (at least 1).
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub depth: Option<usize>,
}

/// Arguments for the `prompt` command.
#[derive(Parser, Debug)]
pub struct PromptArgs {
    #[command(flatten)]
    pub inputs: PromptInputs,
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// File holding raw model output (stdin if omitted).
    pub input: Option<PathBuf>,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Dockerfile to check (default from config: Dockerfile).
    pub dockerfile: Option<PathBuf>,

    /// Directory COPY sources are resolved against.
    #[arg(long)]
    pub project_dir: Option<PathBuf>,

    /// Print missing paths as a JSON array.
    #[arg(long)]
    pub json: bool,

    /// Exit with a validation failure when any source is missing.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite existing files.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
