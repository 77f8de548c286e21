//! Model runner invocation.
//!
//! This module runs the external text-generation process with:
//!
//! - Runner command template substitution (`{model}`)
//! - The prompt delivered on stdin
//! - Full capture of stdout and stderr, blocking until the process exits

mod runner;

pub use runner::{
    Generation, GeneratorOptions, excerpt, generate, report_generation, resolve_command,
};
