//! `docsync clean` — prune fetched docs back to the locally-owned files.

use anyhow::{Context, Result};
use clap::Args;

use docsync_sync::pipeline;

use super::SiteArgs;

/// Arguments for `docsync clean`.
#[derive(Args, Debug)]
pub struct CleanArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl CleanArgs {
    pub fn run(self) -> Result<()> {
        let (root, config) = self.site.load()?;
        println!("Cleaning fetched documentation...");

        let report = pipeline::reset(&root, &config).with_context(|| {
            format!("clean failed for '{}'", config.dest_root(&root).display())
        })?;

        println!(
            "Clean complete: {} removed, {} kept",
            report.removed.len(),
            report.kept.len()
        );
        Ok(())
    }
}
