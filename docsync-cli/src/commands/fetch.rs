//! `docsync fetch` — clone the upstream snapshot and sync it into the site.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use docsync_sync::pipeline::{self, SnapshotSource};

use super::SiteArgs;

/// Arguments for `docsync fetch`.
#[derive(Args, Debug)]
pub struct FetchArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Use an existing checkout of the upstream repo instead of cloning.
    #[arg(long, value_name = "DIR")]
    pub from: Option<PathBuf>,
}

impl FetchArgs {
    pub fn run(self, verbose: bool) -> Result<()> {
        let (root, config) = self.site.load()?;
        let source = match self.from {
            Some(dir) => SnapshotSource::Local(
                dir.canonicalize()
                    .with_context(|| format!("cannot resolve checkout '{}'", dir.display()))?,
            ),
            None => SnapshotSource::from_config(&config),
        };

        println!("Fetching documentation from {}...", source.label());
        let report = pipeline::populate(&root, &config, &source, verbose)
            .with_context(|| format!("fetch from '{}' failed", source.label()))?;

        println!(
            "Fetch complete: {} files copied from {}",
            report.files_written,
            source.label()
        );
        if !report.local_paths_preserved.is_empty() {
            println!(
                "Local files preserved: {}",
                report.local_paths_preserved.join(", ")
            );
        }
        Ok(())
    }
}
