pub mod clean;
pub mod fetch;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use docsync_core::{config, SiteConfig};

/// Options shared by every subcommand.
#[derive(Args, Debug)]
pub struct SiteArgs {
    /// Project root that `dest_dir` and `snapshot_dir` are resolved against.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Config file to use instead of `<root>/docsync.yaml`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl SiteArgs {
    /// Resolve the root and load the config before touching any tree.
    pub fn load(&self) -> Result<(PathBuf, SiteConfig)> {
        let root = self
            .root
            .canonicalize()
            .with_context(|| format!("cannot resolve root '{}'", self.root.display()))?;
        let site = match &self.config {
            Some(path) => config::load_file(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?,
            None => config::load_at(&root)
                .with_context(|| format!("failed to load config in '{}'", root.display()))?,
        };
        Ok((root, site))
    }
}
