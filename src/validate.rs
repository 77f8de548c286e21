//! COPY source checks for generated Dockerfiles.
//!
//! Models happily invent files. Every `COPY` source is resolved against the
//! project directory and the ones that do not exist are reported back. This
//! is a sanity check over a line pattern, not a Dockerfile parser.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

static COPY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^COPY[ \t]+(.+)$").expect("COPY pattern is valid"));

/// One `COPY` instruction split into sources and destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySource {
    /// 1-based line number in the checked text.
    pub line: usize,
    /// Source paths, relative to the build context.
    pub sources: Vec<String>,
    /// Destination inside the image.
    pub destination: String,
}

/// Extract the `COPY` instructions whose sources come from the build context.
///
/// Leading `--flag` options are dropped. Instructions with `--from` copy out
/// of another stage and are skipped, as are instructions with fewer than two
/// operands. Both the shell form (`COPY a b /dst`) and the JSON form
/// (`COPY ["a", "/dst"]`) are understood.
pub fn copy_sources(text: &str) -> Vec<CopySource> {
    COPY_LINE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let line = text[..whole.start()].matches('\n').count() + 1;
            parse_operands(caps.get(1)?.as_str()).map(|(sources, destination)| CopySource {
                line,
                sources,
                destination,
            })
        })
        .collect()
}

fn parse_operands(operands: &str) -> Option<(Vec<String>, String)> {
    let mut rest = operands.trim();
    while rest.starts_with("--") {
        let (flag, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        if flag.starts_with("--from") {
            return None;
        }
        rest = tail.trim_start();
    }

    let mut operands: Vec<String> = if rest.starts_with('[') {
        serde_json::from_str(rest).ok()?
    } else {
        rest.split_whitespace().map(str::to_string).collect()
    };

    if operands.len() < 2 {
        return None;
    }
    let destination = operands.pop()?;
    Some((operands, destination))
}

/// Return every referenced `COPY` source that does not exist under `project_dir`.
///
/// Paths are returned joined onto `project_dir`, in the order they appear.
/// Absolute sources are rooted at the build context, as Docker resolves them.
/// Sources that exist are never included.
pub fn validate_copy_paths(text: &str, project_dir: &Path) -> Vec<PathBuf> {
    copy_sources(text)
        .into_iter()
        .flat_map(|copy| {
            debug!(
                line = copy.line,
                destination = %copy.destination,
                sources = copy.sources.len(),
                "checking COPY instruction"
            );
            copy.sources
        })
        .map(|source| project_dir.join(source.trim_start_matches('/')))
        .filter(|path| !path.exists())
        .collect()
}
