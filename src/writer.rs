//! Dockerfile persistence.
//!
//! The cleaned text is written atomically: content goes to `.{name}.tmp` in
//! the target directory, is synced, and then renamed over the target. An
//! interrupted run never leaves a half-written Dockerfile behind.

use crate::error::{DockgenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What `write_dockerfile` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file at this path now holds exactly the cleaned text.
    Written(PathBuf),
    /// The cleaned text was blank, so nothing was written.
    SkippedEmpty,
}

/// Write `cleaned` to `path` unless it is blank.
///
/// The content is written as-is; no trailing newline is added.
pub fn write_dockerfile(path: &Path, cleaned: &str) -> Result<WriteOutcome> {
    if cleaned.trim().is_empty() {
        debug!(path = %path.display(), "cleaned output is empty, skipping write");
        return Ok(WriteOutcome::SkippedEmpty);
    }

    atomic_write(path, cleaned.as_bytes())?;
    debug!(path = %path.display(), bytes = cleaned.len(), "wrote Dockerfile");
    Ok(WriteOutcome::Written(path.to_path_buf()))
}

/// Atomically write `content` to `path`, creating parent directories.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            DockgenError::WriteError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        DockgenError::WriteError(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            DockgenError::WriteError(format!("invalid output path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.tmp", filename);
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        DockgenError::WriteError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            DockgenError::WriteError(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_exact_cleaned_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Dockerfile");
        let cleaned = "FROM alpine\nCMD [\"sh\"]";

        let outcome = write_dockerfile(&path, cleaned).unwrap();

        assert_eq!(outcome, WriteOutcome::Written(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), cleaned);
    }

    #[test]
    fn empty_text_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Dockerfile");

        assert_eq!(write_dockerfile(&path, "").unwrap(), WriteOutcome::SkippedEmpty);
        assert_eq!(
            write_dockerfile(&path, " \n\t").unwrap(),
            WriteOutcome::SkippedEmpty
        );
        assert!(!path.exists());
    }

    #[test]
    fn empty_text_leaves_existing_file_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Dockerfile");
        fs::write(&path, "FROM previous").unwrap();

        write_dockerfile(&path, "").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "FROM previous");
    }

    #[test]
    fn replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Dockerfile");
        fs::write(&path, "FROM old-base-image-with-a-longer-name").unwrap();

        write_dockerfile(&path, "FROM new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "FROM new");
    }

    #[test]
    fn creates_parent_dirs_and_cleans_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("docker").join("Dockerfile");

        write_dockerfile(&path, "FROM alpine").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "FROM alpine");
        assert!(!temp_dir.path().join("docker/.Dockerfile.tmp").exists());
    }

    #[test]
    fn temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/some/path/Dockerfile")).unwrap();
        assert_eq!(temp, PathBuf::from("/some/path/.Dockerfile.tmp"));

        let temp = temp_path_for(Path::new("Dockerfile")).unwrap();
        assert_eq!(temp, PathBuf::from(".Dockerfile.tmp"));
    }

    #[test]
    fn unwritable_target_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be replaced by a regular file.
        let path = temp_dir.path().join("Dockerfile");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = write_dockerfile(&path, "FROM alpine").unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::WRITE_FAILURE);
        assert!(!temp_dir.path().join(".Dockerfile.tmp").exists());
    }
}
