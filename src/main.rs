//! assetprune CLI - removes stale versioned build outputs
//!
//! Usage: assetprune <COMMAND>
//!
//! Commands:
//!   record  Print the files the manifest currently references
//!   prune   Delete files a previous manifest referenced that the current one dropped
//!   watch   Watch the manifest and prune after every rebuild

mod commands;

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use assetprune::presentation::{Cli, Commands};

use commands::prune::cmd_prune;
use commands::record::cmd_record;
use commands::watch::cmd_watch;

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_tracer(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Record { manifest } => cmd_record(config, manifest, cli.json),
        Commands::Prune {
            previous,
            manifest,
            base_dir,
            dry_run,
        } => cmd_prune(config, &previous, manifest, base_dir, dry_run, cli.json),
        Commands::Watch {
            manifest,
            base_dir,
            dry_run,
        } => cmd_watch(config, manifest, base_dir, dry_run, cli.json),
    }
}

/// Build the stderr subscriber
///
/// `RUST_LOG` wins over `-v` when set.
fn set_tracer(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
