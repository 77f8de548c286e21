//! Configuration constants and defaults for dockgen.

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "dockgen.yaml";

/// Description used when neither the CLI nor the config supplies one.
pub const DEFAULT_DESCRIPTION: &str = "This is a DevOps project using Ansible to install Nginx. \
It contains a playbook and requirements.txt for Python modules.";

// Default value functions for serde
pub(crate) fn default_model() -> String {
    "llama3.2".to_string()
}
pub(crate) fn default_runner_command() -> String {
    "ollama run {model}".to_string()
}
pub(crate) fn default_template_path() -> String {
    "prompt_template.txt".to_string()
}
pub(crate) fn default_output_path() -> String {
    "Dockerfile".to_string()
}
pub(crate) fn default_project_dir() -> String {
    "sample-app".to_string()
}
pub(crate) fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}
pub(crate) fn default_scan_depth() -> usize {
    2
}
pub(crate) fn default_scan_exclude() -> Vec<String> {
    vec![".git".to_string()]
}
pub(crate) fn default_excerpt_chars() -> usize {
    500
}
