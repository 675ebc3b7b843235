//! docsync core library — domain types, site configuration, errors.
//!
//! - [`types`] — entries and classifications
//! - [`config`] — [`SiteConfig`] / [`MappingConfig`] and YAML loading
//! - [`error`] — [`ConfigError`]

pub mod config;
pub mod error;
pub mod types;

pub use config::{MappingConfig, Remap, SiteConfig, SourceConfig};
pub use error::ConfigError;
pub use types::{Classification, EntryKind, SourceEntry};
