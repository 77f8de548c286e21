//! Model reply cleanup.
//!
//! Language models wrap Dockerfiles in markdown fences and surround them with
//! prose. This is a line filter, not a parser: it drops lines that look like
//! noise and keeps everything else verbatim.

/// Strip fence markers and explanatory lines from a model reply.
///
/// The reply is trimmed as a whole, then each line is dropped if
/// [`is_noise_line`] says so. Kept lines are not modified and are joined with
/// `\n` without a trailing newline.
pub fn clean_output(text: &str) -> String {
    text.trim()
        .lines()
        .filter(|line| !is_noise_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether `line` is markdown or commentary rather than Dockerfile content.
///
/// Noise is any line that:
/// - starts with a fence marker (```` ``` ````) after leading whitespace
/// - mentions "explain" in any case (so "Explanation:" headings survive)
/// - is a `#` comment mentioning "use" in any case
pub fn is_noise_line(line: &str) -> bool {
    let trimmed = line.trim();
    let lower = line.to_lowercase();

    if trimmed.starts_with("```") || lower.contains("explain") {
        return true;
    }

    trimmed.starts_with('#') && lower.contains("use")
}
