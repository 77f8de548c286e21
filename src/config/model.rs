//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a dockgen run.
///
/// This struct represents the contents of `dockgen.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Model settings
    // =========================================================================
    /// Model identifier passed to the runner (default: "llama3.2").
    #[serde(default = "default_model")]
    pub model: String,

    /// Runner command template; `{model}` is substituted before splitting.
    #[serde(default = "default_runner_command")]
    pub runner_command: String,

    /// Number of leading characters of the model reply echoed to the console.
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,

    // =========================================================================
    // Input settings
    // =========================================================================
    /// Prompt template with `{project_description}` and `{file_structure}`.
    #[serde(default = "default_template_path")]
    pub template_path: String,

    /// Project directory scanned when none is given on the command line.
    #[serde(default = "default_project_dir")]
    pub project_dir: String,

    /// Free-text project description inserted into the prompt.
    #[serde(default = "default_description")]
    pub description: String,

    /// Maximum listing depth below the project root.
    #[serde(default = "default_scan_depth")]
    pub scan_depth: usize,

    /// Glob patterns for entry names left out of the listing.
    #[serde(default = "default_scan_exclude")]
    pub scan_exclude: Vec<String>,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// Where the cleaned Dockerfile is written.
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            runner_command: default_runner_command(),
            excerpt_chars: default_excerpt_chars(),
            template_path: default_template_path(),
            project_dir: default_project_dir(),
            description: default_description(),
            scan_depth: default_scan_depth(),
            scan_exclude: default_scan_exclude(),
            output_path: default_output_path(),
        }
    }
}
