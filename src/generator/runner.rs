//! Runner subprocess execution.

use crate::config::Config;
use crate::error::{DockgenError, Result};
use crate::prompt::{TemplateError, render_template, vars};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// How to launch the model runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Command template, e.g. `ollama run {model}`.
    pub runner_command: String,
    /// Model identifier substituted for `{model}`.
    pub model: String,
    /// Working directory for the runner (inherits the current one if unset).
    pub working_dir: Option<PathBuf>,
}

impl From<&Config> for GeneratorOptions {
    fn from(config: &Config) -> Self {
        Self {
            runner_command: config.runner_command.clone(),
            model: config.model.clone(),
            working_dir: None,
        }
    }
}

/// Captured result of one runner invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// The rendered command line (for logging).
    pub command: String,
    /// Everything the runner wrote to stdout.
    pub stdout: String,
    /// Everything the runner wrote to stderr.
    pub stderr: String,
    /// Exit code of the process (None if killed by a signal).
    pub exit_code: Option<i32>,
}

impl Generation {
    /// True when the model produced nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.stdout.trim().is_empty()
    }

    /// True when the runner exited with status 0.
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Render and split the runner command into program and arguments.
pub fn resolve_command(options: &GeneratorOptions) -> Result<Vec<String>> {
    let variables = vars([("model", options.model.as_str())]);
    let command_str = render_template(&options.runner_command, &variables).map_err(|e| match e {
        TemplateError::UndefinedVariable { name, .. } => DockgenError::UserError(format!(
            "runner command references undefined variable '{}'\n\
             Command: {}\n\
             Available variables: model",
            name, options.runner_command
        )),
        other => DockgenError::UserError(format!("invalid runner command: {}", other)),
    })?;

    let args = shell_words::split(&command_str).map_err(|e| {
        DockgenError::UserError(format!(
            "failed to parse runner command '{}': {}\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            command_str, e
        ))
    })?;

    if args.is_empty() {
        return Err(DockgenError::UserError(format!(
            "runner command is empty after parsing: '{}'",
            command_str
        )));
    }

    Ok(args)
}

/// Run the model once with `prompt` on stdin and collect its output.
///
/// Blocks until the runner exits. There is no timeout and no retry; a
/// non-zero exit is logged but still returns the captured output.
///
/// # Errors
///
/// * `DockgenError::UserError` - the runner command is malformed
/// * `DockgenError::GeneratorError` - the runner could not be spawned or its pipes failed
pub fn generate(prompt: &str, options: &GeneratorOptions) -> Result<Generation> {
    let args = resolve_command(options)?;
    let command_line = shell_words::join(&args);
    let program = &args[0];

    let mut command = Command::new(program);
    command
        .args(&args[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = &options.working_dir {
        command.current_dir(dir);
    }

    debug!(command = %command_line, prompt_bytes = prompt.len(), "spawning model runner");

    let mut child = command.spawn().map_err(|e| {
        DockgenError::GeneratorError(format!(
            "failed to execute runner '{}': {}\n\
             Fix: ensure the command is installed and in PATH.",
            program, e
        ))
    })?;

    let mut stdin = child.stdin.take().ok_or_else(|| {
        DockgenError::GeneratorError("runner stdin was not captured".to_string())
    })?;

    // Feed stdin from a helper thread so a runner that writes before it has
    // read everything cannot fill its stdout pipe and stall us.
    let (written, output) = std::thread::scope(|scope| {
        let writer = scope.spawn(move || stdin.write_all(prompt.as_bytes()));
        let output = child.wait_with_output();
        (writer.join(), output)
    });

    match written {
        Ok(Ok(())) => {}
        Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("runner closed stdin before the whole prompt was written");
        }
        Ok(Err(e)) => {
            return Err(DockgenError::GeneratorError(format!(
                "failed to write prompt to runner stdin: {}",
                e
            )));
        }
        Err(_) => {
            return Err(DockgenError::GeneratorError(
                "prompt writer thread panicked".to_string(),
            ));
        }
    }

    let output = output.map_err(|e| {
        DockgenError::GeneratorError(format!("failed to collect runner output: {}", e))
    })?;

    let generation = Generation {
        command: command_line,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code(),
    };

    if !generation.is_success() {
        warn!(
            command = %generation.command,
            exit_code = ?generation.exit_code,
            "model runner exited unsuccessfully"
        );
    }
    debug!(
        stdout_bytes = generation.stdout.len(),
        stderr_bytes = generation.stderr.len(),
        "model runner finished"
    );

    Ok(generation)
}

/// First `max_chars` characters of `text`.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Print the console diagnostics for a finished generation.
pub fn report_generation(generation: &Generation, excerpt_chars: usize) {
    if !generation.stderr.is_empty() {
        eprintln!("Warning: stderr from model runner:");
        eprintln!("{}", generation.stderr);
    }

    if generation.is_empty() {
        eprintln!("Error: LLM returned no output.");
    } else {
        println!("LLM output:");
        println!("{}", excerpt(&generation.stdout, excerpt_chars));
        println!("...");
    }
}
