//! Project structure listing.
//!
//! Produces the indented tree that is handed to the model as
//! `{file_structure}`. The listing is depth-limited and sorted so the same
//! project always yields the same prompt.

use crate::config::Config;
use crate::error::{DockgenError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Options controlling how a project is listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Deepest level listed; direct children of the root are level 1.
    pub max_depth: usize,
    /// Glob patterns matched against entry names.
    pub exclude: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ScanOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_depth: config.scan_depth,
            exclude: config.scan_exclude.clone(),
        }
    }
}

/// Compile exclusion patterns into a single matcher.
pub fn build_exclude_set(patterns: &[String]) -> std::result::Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    builder.build()
}

/// List `root` as an indented tree.
///
/// The first line is the root name with a trailing `/`. Every entry at depth
/// `d` is indented by `d` pairs of spaces, and directories carry a trailing
/// `/`. Directories at `max_depth` are listed but not entered.
///
/// # Errors
///
/// Returns `DockgenError::UserError` if the root is missing, is not a
/// directory, or any directory in range cannot be read.
pub fn scan_project(root: &Path, options: &ScanOptions) -> Result<String> {
    if !root.exists() {
        return Err(DockgenError::UserError(format!(
            "project directory '{}' does not exist",
            root.display()
        )));
    }
    if !root.is_dir() {
        return Err(DockgenError::UserError(format!(
            "project path '{}' is not a directory",
            root.display()
        )));
    }

    let exclude = build_exclude_set(&options.exclude).map_err(|e| {
        DockgenError::UserError(format!("invalid scan exclude pattern: {}", e))
    })?;

    let mut lines = vec![format!("{}/", root_name(root))];
    walk(root, 1, options.max_depth, &exclude, &mut lines)?;

    debug!(
        root = %root.display(),
        entries = lines.len() - 1,
        "scanned project structure"
    );
    Ok(lines.join("\n"))
}

fn walk(
    dir: &Path,
    depth: usize,
    max_depth: usize,
    exclude: &GlobSet,
    lines: &mut Vec<String>,
) -> Result<()> {
    if depth > max_depth {
        return Ok(());
    }

    let mut entries = fs::read_dir(dir)
        .and_then(|iter| iter.collect::<std::io::Result<Vec<_>>>())
        .map_err(|e| {
            DockgenError::UserError(format!(
                "failed to read directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    entries.sort_by_key(|entry| entry.file_name());

    let indent = "  ".repeat(depth);
    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        if exclude.is_match(&name) {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            lines.push(format!("{}{}/", indent, name));
            walk(&path, depth + 1, max_depth, exclude, lines)?;
        } else {
            lines.push(format!("{}{}", indent, name));
        }
    }

    Ok(())
}

/// Display name for the listing root, resolving `.` and `..` when possible.
fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| {
            root.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| root.display().to_string())
}
