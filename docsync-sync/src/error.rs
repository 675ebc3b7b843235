//! Error types for docsync-sync.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use docsync_core::ConfigError;

/// All errors that can arise from sync, prune and fetch operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from loading or validating the site config.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `git clone` ran but exited unsuccessfully.
    #[error("git clone of {repository} failed (status {status}): {stderr}")]
    Fetch {
        repository: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
