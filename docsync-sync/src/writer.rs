//! Atomic file writer.
//!
//! ## `atomic_write` — 3-step protocol
//!
//! 1. Ensure the parent directory exists.
//! 2. Write to `<path>.docsync.tmp`.
//! 3. Rename to the final path (atomic on POSIX); drop the `.tmp` on failure.
//!
//! Content is written byte-for-byte; line endings are never normalised.

use std::path::{Path, PathBuf};

use crate::error::{io_err, SyncError};

/// Suffix appended to the target path for the in-flight temp file.
pub const TMP_SUFFIX: &str = ".docsync.tmp";

/// Atomically replace `path` with `content`.
pub fn atomic_write(path: &Path, content: &str) -> Result<(), SyncError> {
    let tmp = PathBuf::from(format!("{}{TMP_SUFFIX}", path.display()));
    atomic_write_with_tmp(path, content, &tmp)
}

fn atomic_write_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<(), SyncError> {
    // Step 1: parent directories.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent() {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }

    // Step 2: temp file.
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    // Step 3: rename over the target.
    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
