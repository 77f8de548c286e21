//! Prompt construction.
//!
//! This module provides:
//!
//! - **Template**: `{variable}` substitution used for prompts and runner commands
//! - **Builder**: template loading and filling with the project description and structure
//!
//! # Template Syntax
//!
//! ```text
//! Project description:
//! {project_description}
//!
//! File structure:
//! {file_structure}
//! ```
//!
//! Use `{{` and `}}` to render literal braces.

mod builder;
mod template;

pub use builder::{
    DEFAULT_TEMPLATE, DESCRIPTION_VAR, STRUCTURE_VAR, build_prompt, load_template,
};
pub use template::{TemplateError, render_template, vars};
