//! Filesystem helpers shared by the config and session stores.

use std::io::Write;
use std::path::Path;

/// Replaces `path` with `content` via a temp file in the same directory.
///
/// Temp files are created owner-only, so the result is too on Unix.
///
/// # Errors
/// Returns error if the directory cannot be created or the file cannot be written.
pub fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other("invalid path"))?;
    std::fs::create_dir_all(parent)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content)?;
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}
