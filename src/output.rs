//! Writing the converted EPUB to the user's chosen path.

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to write {}: {reason}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    pub reason: String,
}

/// Write `bytes` to `path` all-or-nothing.
///
/// The buffer is staged in a temporary file next to the target and renamed
/// over it only once fully flushed, so a failure never leaves a truncated
/// EPUB behind.
pub fn write_epub(path: &Path, bytes: &[u8]) -> Result<u64, WriteError> {
    let fail = |reason: String| WriteError {
        path: path.to_path_buf(),
        reason,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(parent).map_err(|err| fail(err.to_string()))?;
    staged
        .write_all(bytes)
        .and_then(|_| staged.as_file().sync_all())
        .map_err(|err| fail(err.to_string()))?;
    staged
        .persist(path)
        .map_err(|err| fail(err.error.to_string()))?;
    Ok(bytes.len() as u64)
}
