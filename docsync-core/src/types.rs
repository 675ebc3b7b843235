//! Domain types shared by the classifier, the synchronizer and the pruner.
//!
//! Relative paths are POSIX-style `String`s (slash-separated, no leading
//! slash) because they are matched textually against the mapping config.

use std::fmt;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Kind of a filesystem entry seen during a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

/// Decision taken for a single source entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Transform and write into the destination tree.
    Copy,
    /// Descend into the directory.
    Recurse,
    /// Owned by the site; never overwritten.
    SkipLocal,
    /// Known to break the site renderer.
    SkipBlocked,
    /// Dot-directory (version-control metadata and friends).
    SkipHidden,
    /// Not a documentation markup file.
    Ignore,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Copy => write!(f, "copy"),
            Classification::Recurse => write!(f, "recurse"),
            Classification::SkipLocal => write!(f, "skip-local"),
            Classification::SkipBlocked => write!(f, "skip-blocked"),
            Classification::SkipHidden => write!(f, "skip-hidden"),
            Classification::Ignore => write!(f, "ignore"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One entry of the source snapshot, relative to the documentation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub relative_path: String,
    pub kind: EntryKind,
}

impl SourceEntry {
    pub fn new(relative_path: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            relative_path: relative_path.into(),
            kind,
        }
    }

    /// Last path segment.
    pub fn name(&self) -> &str {
        self.relative_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.relative_path)
    }

    /// Extension of the last segment, without the dot.
    pub fn extension(&self) -> Option<&str> {
        let name = self.name();
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }
}

/// Join a parent relative path and a child name with `/`.
pub fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}/{name}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
