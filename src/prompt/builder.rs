//! Prompt template loading and filling.

use super::template::{TemplateError, render_template, vars};
use crate::error::{DockgenError, Result};
use std::path::Path;
use tracing::debug;

/// Placeholder for the free-text project description.
pub const DESCRIPTION_VAR: &str = "project_description";

/// Placeholder for the scanned directory listing.
pub const STRUCTURE_VAR: &str = "file_structure";

/// Starter template written by `dockgen init`.
pub const DEFAULT_TEMPLATE: &str = "\
You are a DevOps assistant that writes production-ready Dockerfiles.

Project description:
{project_description}

Project file structure:
{file_structure}

Write a Dockerfile for this project.
Only COPY files and directories that appear in the file structure above.
Reply with the Dockerfile content only: no markdown fences and no explanations.
";

/// Read the prompt template at `path`.
///
/// # Errors
///
/// A missing file is a `UserError` (exit 1) naming the path.
pub fn load_template(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DockgenError::UserError(format!(
            "{} is missing.\n\
             Fix: run `dockgen init` to write the default template, or pass --template.",
            path.display()
        )));
    }

    let template = std::fs::read_to_string(path).map_err(|e| {
        DockgenError::UserError(format!(
            "failed to read prompt template '{}': {}",
            path.display(),
            e
        ))
    })?;

    debug!(path = %path.display(), bytes = template.len(), "loaded prompt template");
    Ok(template)
}

/// Fill `template` with the project description and file structure.
pub fn build_prompt(template: &str, description: &str, structure: &str) -> Result<String> {
    let variables = vars([(DESCRIPTION_VAR, description), (STRUCTURE_VAR, structure)]);

    render_template(template, &variables).map_err(|e| match e {
        TemplateError::UndefinedVariable { name, .. } => DockgenError::UserError(format!(
            "prompt template references unknown placeholder '{{{}}}'\n\
             Available placeholders: {{{}}}, {{{}}}",
            name, DESCRIPTION_VAR, STRUCTURE_VAR
        )),
        other => DockgenError::UserError(format!("invalid prompt template: {}", other)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_template;
    use tempfile::TempDir;

    #[test]
    fn build_prompt_substitutes_exactly() {
        let template = "Describe: {project_description}\n---\n{file_structure}";
        let prompt = build_prompt(template, "A web app", "app/\n  main.py").unwrap();
        assert_eq!(prompt, "Describe: A web app\n---\napp/\n  main.py");
    }

    #[test]
    fn build_prompt_allows_unused_placeholders() {
        let prompt = build_prompt("Only {file_structure}", "ignored", "x/").unwrap();
        assert_eq!(prompt, "Only x/");
    }

    #[test]
    fn build_prompt_rejects_unknown_placeholder() {
        let err = build_prompt("{language}", "d", "s").unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
        let msg = err.to_string();
        assert!(msg.contains("'{language}'"));
        assert!(msg.contains("{project_description}"));
    }

    #[test]
    fn build_prompt_reports_syntax_errors() {
        let err = build_prompt("{project_description", "d", "s").unwrap_err();
        assert!(err.to_string().contains("invalid prompt template"));
    }

    #[test]
    fn default_template_renders() {
        let prompt = build_prompt(DEFAULT_TEMPLATE, "A Go service", "svc/\n  go.mod").unwrap();
        assert!(prompt.contains("A Go service"));
        assert!(prompt.contains("svc/\n  go.mod"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn load_template_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_template(&temp_dir, "Hello {project_description}");

        assert_eq!(load_template(&path).unwrap(), "Hello {project_description}");
    }

    #[test]
    fn load_template_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prompt_template.txt");

        let err = load_template(&path).unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
        assert!(err.to_string().contains("prompt_template.txt is missing."));
    }
}
