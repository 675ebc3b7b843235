//! Git-backed snapshot provider.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{io_err, SyncError};

/// Shallow-clone `branch` of `repository` into `into`.
///
/// `into` must not exist yet. With `verbose`, git's progress goes straight
/// to the terminal; otherwise it is captured and only surfaced on failure.
pub fn clone_snapshot(
    repository: &str,
    branch: &str,
    into: &Path,
    verbose: bool,
) -> Result<(), SyncError> {
    tracing::info!("cloning {repository} (branch: {branch})");

    let mut cmd = Command::new("git");
    cmd.args(["clone", "--depth", "1", "--branch", branch, repository])
        .arg(into)
        .stdin(Stdio::null());
    if verbose {
        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    } else {
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    }

    let output = cmd.output().map_err(|e| io_err("git", e))?;
    if !output.status.success() {
        return Err(SyncError::Fetch {
            repository: repository.to_owned(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}
