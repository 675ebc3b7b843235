//! Tree synchronizer: walks the snapshot's documentation subtree and mirrors
//! every copyable file into the destination tree.
//!
//! The walk is depth-first and strictly sequential. Siblings are visited in
//! file-name order so verbose logs are stable between runs.

use std::fs;
use std::path::Path;

use docsync_core::types::join_relative;
use docsync_core::{Classification, EntryKind, MappingConfig, SiteConfig, SourceEntry};

use crate::classify::classify;
use crate::error::{io_err, SyncError};
use crate::transform::Transformer;
use crate::writer::atomic_write;

/// Populate `dest_root` from `snapshot_root`.
///
/// Walks `<snapshot_root>/<docs_dir>`, then resolves every configured remap
/// against `snapshot_root`. Returns the number of files written.
///
/// A missing documentation subtree counts as zero entries. Any read or write
/// failure aborts the run.
pub fn sync(
    snapshot_root: &Path,
    dest_root: &Path,
    config: &SiteConfig,
) -> Result<usize, SyncError> {
    let docs_prefix = config.source.docs_dir.trim_end_matches('/');
    let walker = Walker {
        mapping: &config.mapping,
        transformer: Transformer::new(config.source.browse_url.as_str()),
        docs_prefix,
    };

    let docs_root = snapshot_root.join(docs_prefix);
    let mut written = if docs_root.is_dir() {
        walker.walk_dir(&docs_root, dest_root, "")?
    } else {
        tracing::debug!("no documentation root at {}", docs_root.display());
        0
    };

    for remap in &config.mapping.remaps {
        let src = snapshot_root.join(&remap.source);
        if !src.is_file() {
            tracing::debug!("remap source absent: {}", remap.source);
            continue;
        }
        walker.copy_file(&src, &dest_root.join(&remap.dest), &remap.source)?;
        tracing::debug!("copied: {} -> {}", remap.source, remap.dest);
        written += 1;
    }

    tracing::info!("sync complete: {written} files written to {}", dest_root.display());
    Ok(written)
}

struct Walker<'a> {
    mapping: &'a MappingConfig,
    transformer: Transformer,
    docs_prefix: &'a str,
}

impl Walker<'_> {
    fn walk_dir(
        &self,
        src_dir: &Path,
        dest_dir: &Path,
        relative: &str,
    ) -> Result<usize, SyncError> {
        let mut entries: Vec<_> = fs::read_dir(src_dir)
            .map_err(|e| io_err(src_dir, e))?
            .collect::<Result<_, _>>()
            .map_err(|e| io_err(src_dir, e))?;
        entries.sort_by_key(|e| e.file_name());

        let mut count = 0;
        for dir_entry in entries {
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            let src_path = dir_entry.path();
            let dest_path = dest_dir.join(&name);
            // Symlinks are not followed: a link to a directory is never walked.
            let file_type = dir_entry.file_type().map_err(|e| io_err(&src_path, e))?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            let entry = SourceEntry::new(join_relative(relative, &name), kind);

            let classification = classify(&entry, self.mapping);
            match classification {
                Classification::Recurse => {
                    fs::create_dir_all(&dest_path).map_err(|e| io_err(&dest_path, e))?;
                    count += self.walk_dir(&src_path, &dest_path, &entry.relative_path)?;
                }
                Classification::Copy => {
                    let source_path = join_relative(self.docs_prefix, &entry.relative_path);
                    self.copy_file(&src_path, &dest_path, &source_path)?;
                    tracing::debug!("copied: {}", entry.relative_path);
                    count += 1;
                }
                Classification::SkipLocal
                | Classification::SkipBlocked
                | Classification::SkipHidden
                | Classification::Ignore => {
                    tracing::debug!("{classification}: {}", entry.relative_path);
                }
            }
        }
        Ok(count)
    }

    /// Read, transform, write. `source_path` is relative to the upstream repo root.
    fn copy_file(&self, src: &Path, dest: &Path, source_path: &str) -> Result<(), SyncError> {
        let raw = fs::read_to_string(src).map_err(|e| io_err(src, e))?;
        let result = self.transformer.transform(&raw, source_path);
        atomic_write(dest, &result.content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
