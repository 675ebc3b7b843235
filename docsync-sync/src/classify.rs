//! Per-entry sync decision.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//!
//! 1. hidden directory        -> `SkipHidden`
//! 2. any other directory     -> `Recurse`
//! 3. non-markup file         -> `Ignore`
//! 4. blocked file name       -> `SkipBlocked`
//! 5. locally-owned path      -> `SkipLocal`
//! 6. everything else         -> `Copy`
//!
//! New exclusions belong in [`MappingConfig`], not here.

use docsync_core::{Classification, EntryKind, MappingConfig, SourceEntry};

/// Classify a single source entry. Pure and total.
pub fn classify(entry: &SourceEntry, config: &MappingConfig) -> Classification {
    match entry.kind {
        EntryKind::Directory if entry.name().starts_with('.') => Classification::SkipHidden,
        EntryKind::Directory => Classification::Recurse,
        EntryKind::File => {
            if entry.extension() != Some(config.markup_extension.as_str()) {
                Classification::Ignore
            } else if config.is_blocked(&entry.relative_path) {
                Classification::SkipBlocked
            } else if config.is_local(&entry.relative_path) {
                Classification::SkipLocal
            } else {
                Classification::Copy
            }
        }
    }
}
