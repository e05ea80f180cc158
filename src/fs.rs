//! File system utilities.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a secret to a file readable and writable by the owner only.
///
/// The content goes to a freshly created temp file in the same directory and
/// is renamed into place, so an interrupted write never leaves a truncated
/// key behind. The temp file gets a random name and is created exclusively
/// with mode `0600` on Unix, so a pre-existing file can never leak its
/// permissions onto the key. It is removed if any step fails.
///
/// # Errors
///
/// Returns an error if the temp file cannot be created, written or renamed.
pub fn write_private(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", file.path().display()))?;
    file.as_file()
        .sync_all()
        .with_context(|| format!("Failed to sync {}", file.path().display()))?;

    file.persist(path)
        .with_context(|| format!("Failed to move key file into {}", path.display()))?;

    Ok(())
}
