//! Site configuration and the mapping rules it carries.
//!
//! # File layout
//!
//! ```text
//! <root>/
//!   docsync.yaml        (optional — built-in defaults apply when absent)
//!   docs/               (dest_dir — the site generator's content root)
//!   .docs-temp/         (snapshot_dir — transient clone, removed after sync)
//! ```
//!
//! # API pattern
//!
//! - `load_at(root)` — reads `<root>/docsync.yaml`, falling back to defaults
//! - `load_file(path)` — reads an explicit file; missing is an error
//!
//! Both validate before returning, so callers never see a config that breaks
//! the mapping invariants.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default config file name, looked up in the project root.
pub const CONFIG_FILE: &str = "docsync.yaml";

// ---------------------------------------------------------------------------
// 1. Types
// ---------------------------------------------------------------------------

/// An explicit source -> destination rename for a file outside the docs subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Remap {
    /// Path relative to the snapshot root (e.g. `CHANGELOG.md`).
    pub source: String,
    /// Path relative to the destination root (e.g. `changelog.md`).
    pub dest: String,
}

impl Remap {
    pub fn new(source: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }
}

/// Declarative mapping rules consumed by the classifier, the synchronizer
/// and the pruner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingConfig {
    /// Extension (without dot) of files that are synced at all.
    pub markup_extension: String,
    /// Paths owned by the site. A trailing `/` marks a directory.
    pub local_paths: Vec<String>,
    /// File names that must never reach the destination.
    pub blocked_filenames: Vec<String>,
    /// Files pulled from outside the docs subtree, in resolution order.
    pub remaps: Vec<Remap>,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            markup_extension: "md".to_owned(),
            local_paths: vec!["index.md".to_owned(), ".vitepress/".to_owned()],
            // README files are replaced by the site's own index.
            blocked_filenames: vec!["copilot-instructions.md".to_owned(), "README.md".to_owned()],
            remaps: vec![Remap::new("CHANGELOG.md", "changelog.md")],
        }
    }
}

impl MappingConfig {
    /// `true` if `relative_path` equals or is nested under a local path.
    pub fn is_local(&self, relative_path: &str) -> bool {
        self.local_paths.iter().any(|local| {
            let local = local.trim_end_matches('/');
            relative_path == local
                || relative_path
                    .strip_prefix(local)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    /// `true` if the top-level destination entry `name` holds local content,
    /// either because it is a local path itself or because a local path is
    /// nested beneath it.
    pub fn protects_top_level(&self, name: &str) -> bool {
        self.local_paths.iter().any(|local| {
            let first = local.trim_end_matches('/').split('/').next().unwrap_or("");
            first == name
        })
    }

    /// `true` if the basename of `relative_path` is blocked.
    pub fn is_blocked(&self, relative_path: &str) -> bool {
        self.blocked_filenames.iter().any(|blocked| {
            relative_path == blocked
                || relative_path
                    .strip_suffix(blocked.as_str())
                    .is_some_and(|head| head.ends_with('/'))
        })
    }

    /// Local paths that name files rather than directories, for reporting.
    pub fn local_files(&self) -> Vec<&str> {
        self.local_paths
            .iter()
            .filter(|p| !p.ends_with('/'))
            .map(String::as_str)
            .collect()
    }

    /// Check the mapping invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.markup_extension.is_empty() || self.markup_extension.starts_with('.') {
            return Err(ConfigError::Invalid(format!(
                "markup_extension must be a bare extension like \"md\", got {:?}",
                self.markup_extension
            )));
        }
        for local in &self.local_paths {
            check_relative("local_paths", local)?;
        }
        for blocked in &self.blocked_filenames {
            if blocked.is_empty() || blocked.contains('/') {
                return Err(ConfigError::Invalid(format!(
                    "blocked_filenames entries must be bare file names, got {blocked:?}"
                )));
            }
        }
        for remap in &self.remaps {
            check_relative("remaps.source", &remap.source)?;
            check_relative("remaps.dest", &remap.dest)?;
            if self.is_local(&remap.source) {
                return Err(ConfigError::Invalid(format!(
                    "remap source {:?} is also a local path",
                    remap.source
                )));
            }
            if self.is_local(&remap.dest) {
                return Err(ConfigError::Invalid(format!(
                    "remap destination {:?} would overwrite a local path",
                    remap.dest
                )));
            }
        }
        Ok(())
    }
}

/// Where the upstream documentation comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Git URL cloned into the snapshot directory.
    pub repository: String,
    pub branch: String,
    /// Documentation subtree inside the snapshot.
    pub docs_dir: String,
    /// Base URL used in provenance headers; file paths are appended to it.
    pub browse_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            repository: "https://github.com/mapyr/mcp-hangar.git".to_owned(),
            branch: "main".to_owned(),
            docs_dir: "docs".to_owned(),
            browse_url: "https://github.com/mapyr/mcp-hangar/blob/main".to_owned(),
        }
    }
}

/// Root of `docsync.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub source: SourceConfig,
    /// Destination tree, relative to the project root.
    pub dest_dir: String,
    /// Transient snapshot location, relative to the project root.
    pub snapshot_dir: String,
    pub mapping: MappingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            dest_dir: "docs".to_owned(),
            snapshot_dir: ".docs-temp".to_owned(),
            mapping: MappingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// `<root>/<dest_dir>`
    pub fn dest_root(&self, root: &Path) -> PathBuf {
        root.join(&self.dest_dir)
    }

    /// `<root>/<snapshot_dir>`
    pub fn snapshot_root(&self, root: &Path) -> PathBuf {
        root.join(&self.snapshot_dir)
    }

    /// Check every field; runs before any tree I/O.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("source.repository", &self.source.repository),
            ("source.branch", &self.source.branch),
            ("source.browse_url", &self.source.browse_url),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} must not be empty")));
            }
        }
        check_relative("source.docs_dir", &self.source.docs_dir)?;
        check_relative("dest_dir", &self.dest_dir)?;
        check_relative("snapshot_dir", &self.snapshot_dir)?;

        // Both trees are deleted wholesale by reset; neither may be the
        // project root, and the snapshot must not enclose the destination.
        let dest = segments(&self.dest_dir);
        let snapshot = segments(&self.snapshot_dir);
        if dest.is_empty() {
            return Err(ConfigError::Invalid(
                "dest_dir must not be the project root".to_owned(),
            ));
        }
        if snapshot.is_empty() {
            return Err(ConfigError::Invalid(
                "snapshot_dir must not be the project root".to_owned(),
            ));
        }
        if dest.starts_with(&snapshot) {
            return Err(ConfigError::Invalid(format!(
                "snapshot_dir {:?} must not equal or contain dest_dir {:?}",
                self.snapshot_dir, self.dest_dir
            )));
        }
        self.mapping.validate()
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_yaml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

/// `<root>/docsync.yaml` — pure, no I/O.
pub fn config_path_at(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Load `<root>/docsync.yaml`, or the built-in defaults when it is absent.
pub fn load_at(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = config_path_at(root);
    if !path.exists() {
        let config = SiteConfig::default();
        config.validate()?;
        return Ok(config);
    }
    load_file(&path)
}

/// Load an explicitly named config file.
///
/// Returns `ConfigError::NotFound` if absent, `ConfigError::Parse` (with path
/// + line context) if malformed YAML, `ConfigError::Invalid` if it breaks a
/// mapping invariant.
pub fn load_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    SiteConfig::from_yaml(path, &contents)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Path segments with empty and `.` segments dropped.
fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect()
}

fn check_relative(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} entries must not be empty")));
    }
    if trimmed.starts_with('/') || trimmed.split('/').any(|seg| seg == "..") {
        return Err(ConfigError::Invalid(format!(
            "{field} must be a relative path without `..`, got {value:?}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
