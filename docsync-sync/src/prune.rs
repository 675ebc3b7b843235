//! Destination pruner: resets the destination tree to its locally-owned
//! baseline.
//!
//! Only top-level entries are considered. Anything not protected by
//! [`MappingConfig::protects_top_level`] is removed outright, which also
//! covers subtrees the synchronizer created. Running twice is a no-op.

use std::fs;
use std::path::{Path, PathBuf};

use docsync_core::MappingConfig;

use crate::error::{io_err, SyncError};

/// What a prune run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PruneReport {
    /// Top-level entries deleted from the destination.
    pub removed: Vec<PathBuf>,
    /// Top-level entries kept because they hold local content.
    pub kept: Vec<PathBuf>,
    /// `true` if a leftover snapshot directory was deleted.
    pub snapshot_removed: bool,
}

/// Delete every non-local top-level entry of `dest_root`, then remove
/// `snapshot_dir` if it exists.
pub fn prune(
    dest_root: &Path,
    snapshot_dir: &Path,
    config: &MappingConfig,
) -> Result<PruneReport, SyncError> {
    let mut report = PruneReport::default();

    if dest_root.is_dir() {
        let mut entries: Vec<_> = fs::read_dir(dest_root)
            .map_err(|e| io_err(dest_root, e))?
            .collect::<Result<_, _>>()
            .map_err(|e| io_err(dest_root, e))?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();

            if config.protects_top_level(&name) {
                tracing::debug!("keeping local: {name}");
                report.kept.push(path);
                continue;
            }

            let file_type = entry.file_type().map_err(|e| io_err(&path, e))?;
            if file_type.is_dir() {
                fs::remove_dir_all(&path).map_err(|e| io_err(&path, e))?;
                tracing::debug!("removed dir: {name}");
            } else {
                fs::remove_file(&path).map_err(|e| io_err(&path, e))?;
                tracing::debug!("removed: {name}");
            }
            report.removed.push(path);
        }
    }

    if snapshot_dir.exists() {
        fs::remove_dir_all(snapshot_dir).map_err(|e| io_err(snapshot_dir, e))?;
        tracing::debug!("removed snapshot: {}", snapshot_dir.display());
        report.snapshot_removed = true;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_destination_is_a_noop() {
        let tmp = TempDir::new().unwrap();
        let report = prune(
            &tmp.path().join("docs"),
            &tmp.path().join(".docs-temp"),
            &MappingConfig::default(),
        )
        .unwrap();
        assert_eq!(report, PruneReport::default());
    }

    #[test]
    fn removes_snapshot_even_without_destination() {
        let tmp = TempDir::new().unwrap();
        let snapshot = tmp.path().join(".docs-temp");
        fs::create_dir_all(snapshot.join(".git")).unwrap();

        let report = prune(&tmp.path().join("docs"), &snapshot, &MappingConfig::default()).unwrap();
        assert!(report.snapshot_removed);
        assert!(!snapshot.exists());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_unlinked_not_followed() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("docs");
        let outside = tmp.path().join("outside");
        fs::create_dir_all(&dest).unwrap();
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join("keep.md"), "x").unwrap();
        std::os::unix::fs::symlink(&outside, dest.join("link")).unwrap();

        prune(&dest, &tmp.path().join(".docs-temp"), &MappingConfig::default()).unwrap();

        assert!(!dest.join("link").exists());
        assert!(outside.join("keep.md").exists(), "link target must survive");
    }
}
