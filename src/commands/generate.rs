//! Implementation of the `dockgen generate` command.
//!
//! Runs the whole pipeline once:
//! 1. List the project structure
//! 2. Load the prompt template and fill it
//! 3. Run the model with the prompt on stdin
//! 4. Clean the reply
//! 5. Warn about COPY sources that do not exist
//! 6. Save the Dockerfile (or print it with `--dry-run`)
//!
//! Only a failed scan, a missing template, and infrastructure failures abort
//! the run. An empty reply or missing COPY sources are warnings.

use crate::clean::clean_output;
use crate::cli::GenerateArgs;
use crate::context::RunContext;
use crate::error::Result;
use crate::generator::{GeneratorOptions, generate, report_generation};
use crate::prompt::{build_prompt, load_template};
use crate::scan::{ScanOptions, scan_project};
use crate::validate::validate_copy_paths;
use crate::writer::{WriteOutcome, write_dockerfile};
use std::path::PathBuf;
use tracing::{debug, info};

/// Summary of one `generate` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Cleaned model output.
    pub dockerfile: String,
    /// COPY sources that do not exist in the project.
    pub missing: Vec<PathBuf>,
    /// Whether and where the Dockerfile was written. `None` for dry runs.
    pub outcome: Option<WriteOutcome>,
}

/// Execute the `dockgen generate` command.
pub fn cmd_generate(ctx: &RunContext, args: GenerateArgs) -> Result<()> {
    let report = run_generate(ctx, &args)?;
    debug!(
        bytes = report.dockerfile.len(),
        missing = report.missing.len(),
        written = matches!(report.outcome, Some(WriteOutcome::Written(_))),
        "generate finished"
    );
    Ok(())
}

pub(crate) fn run_generate(ctx: &RunContext, args: &GenerateArgs) -> Result<GenerateReport> {
    let config = &ctx.config;
    let project_dir = ctx.project_dir(args.inputs.project_dir.as_deref());
    let template_path = ctx.template_path(args.inputs.template.as_deref());
    let output_path = ctx.output_path(args.output.as_deref());
    let description = args
        .inputs
        .description
        .as_deref()
        .unwrap_or(&config.description);

    let structure = scan_project(&project_dir, &ScanOptions::from(config))?;
    let template = load_template(&template_path)?;
    let prompt = build_prompt(&template, description, &structure)?;

    let mut options = GeneratorOptions::from(config);
    if let Some(model) = &args.model {
        options.model = model.clone();
    }
    if let Some(runner) = &args.runner {
        options.runner_command = runner.clone();
    }
    options.working_dir = Some(ctx.cwd.clone());

    info!(
        project = %project_dir.display(),
        model = %options.model,
        "generating Dockerfile"
    );

    let generation = generate(&prompt, &options)?;
    report_generation(&generation, config.excerpt_chars);

    let dockerfile = clean_output(&generation.stdout);
    if dockerfile.trim().is_empty() {
        eprintln!("Error: Dockerfile was empty. Not saved.");
        return Ok(GenerateReport {
            dockerfile,
            missing: Vec::new(),
            outcome: (!args.dry_run).then_some(WriteOutcome::SkippedEmpty),
        });
    }

    let missing = validate_copy_paths(&dockerfile, &project_dir);
    print_missing(&missing);

    if args.dry_run {
        println!("{}", dockerfile);
        return Ok(GenerateReport {
            dockerfile,
            missing,
            outcome: None,
        });
    }

    let outcome = write_dockerfile(&output_path, &dockerfile)?;
    if let WriteOutcome::Written(path) = &outcome {
        println!("Dockerfile cleaned, validated, and saved to {}.", path.display());
    }

    Ok(GenerateReport {
        dockerfile,
        missing,
        outcome: Some(outcome),
    })
}

/// Print the COPY warning block; nothing when `missing` is empty.
pub(crate) fn print_missing(missing: &[PathBuf]) {
    if missing.is_empty() {
        return;
    }

    eprintln!("Warning: Some COPY source paths do not exist:");
    for path in missing {
        eprintln!("   - {}", path.display());
    }
}
