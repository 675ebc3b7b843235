//! docsync — pull upstream documentation into a site's content tree.
//!
//! # Usage
//!
//! ```text
//! docsync fetch [--root DIR] [--config FILE] [--from DIR] [-v]
//! docsync clean [--root DIR] [--config FILE] [-v]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{clean::CleanArgs, fetch::FetchArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "docsync",
    version,
    about = "Sync upstream documentation into a local docs site",
    long_about = None,
)]
struct Cli {
    /// Log every per-file decision.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the upstream snapshot and mirror its docs into the destination.
    Fetch(FetchArgs),

    /// Remove fetched docs, keeping locally-owned files.
    Clean(CleanArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Fetch(args) => args.run(cli.verbose),
        Commands::Clean(args) => args.run(),
    }
}

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
