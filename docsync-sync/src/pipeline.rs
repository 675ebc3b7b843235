//! Shared entrypoints for the two operating modes: populate and reset.
//!
//! ```text
//! populate:  Idle -> Fetching -> Syncing -> Idle
//! reset:     Idle -> Pruning -> Idle
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use docsync_core::SiteConfig;

use crate::error::{io_err, SyncError};
use crate::fetch;
use crate::prune::{self, PruneReport};
use crate::tree;

/// Where the snapshot for a populate run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    /// Shallow-clone into the configured snapshot directory, removed afterwards.
    Git { repository: String, branch: String },
    /// An existing checkout; used in place and never deleted.
    Local(PathBuf),
}

impl SnapshotSource {
    /// The git source described by `config.source`.
    pub fn from_config(config: &SiteConfig) -> Self {
        SnapshotSource::Git {
            repository: config.source.repository.clone(),
            branch: config.source.branch.clone(),
        }
    }

    /// Human-readable origin for summaries.
    pub fn label(&self) -> String {
        match self {
            SnapshotSource::Git { repository, .. } => repository.clone(),
            SnapshotSource::Local(path) => path.display().to_string(),
        }
    }
}

/// Outcome of a populate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulateReport {
    pub files_written: usize,
    /// File-type local paths, for the closing summary.
    pub local_paths_preserved: Vec<String>,
}

/// Fetch (if needed) and sync into `<root>/<dest_dir>`.
pub fn populate(
    root: &Path,
    config: &SiteConfig,
    source: &SnapshotSource,
    verbose: bool,
) -> Result<PopulateReport, SyncError> {
    config.validate()?;
    let dest_root = config.dest_root(root);

    let files_written = match source {
        SnapshotSource::Local(path) => tree::sync(path, &dest_root, config)?,
        SnapshotSource::Git { repository, branch } => {
            let snapshot = config.snapshot_root(root);
            remove_snapshot(&snapshot)?;
            fetch::clone_snapshot(repository, branch, &snapshot, verbose)?;
            finish_snapshot(tree::sync(&snapshot, &dest_root, config), &snapshot)?
        }
    };

    Ok(PopulateReport {
        files_written,
        local_paths_preserved: config
            .mapping
            .local_files()
            .into_iter()
            .map(str::to_owned)
            .collect(),
    })
}

/// Prune `<root>/<dest_dir>` back to its local files and drop the snapshot.
pub fn reset(root: &Path, config: &SiteConfig) -> Result<PruneReport, SyncError> {
    config.validate()?;
    let report = prune::prune(
        &config.dest_root(root),
        &config.snapshot_root(root),
        &config.mapping,
    )?;
    tracing::info!("clean complete: {} entries removed", report.removed.len());
    Ok(report)
}

/// Drop the cloned snapshot after a sync. A sync failure wins over a cleanup
/// failure; the latter is only logged.
fn finish_snapshot(
    result: Result<usize, SyncError>,
    snapshot: &Path,
) -> Result<usize, SyncError> {
    let cleanup = remove_snapshot(snapshot);
    match result {
        Ok(written) => cleanup.map(|()| written),
        Err(err) => {
            if let Err(cleanup_err) = cleanup {
                tracing::warn!("snapshot cleanup failed after sync error: {cleanup_err}");
            }
            Err(err)
        }
    }
}

fn remove_snapshot(snapshot: &Path) -> Result<(), SyncError> {
    if snapshot.exists() {
        fs::remove_dir_all(snapshot).map_err(|e| io_err(snapshot, e))?;
    }
    Ok(())
}
