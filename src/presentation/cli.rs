//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.
//! Path flags override the configuration file and environment.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// assetprune - keep build output directories free of stale versioned assets
#[derive(Parser, Debug)]
#[command(name = "assetprune")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./assetprune.toml, then user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the files the manifest currently references
    Record {
        /// Manifest file
        #[arg(short, long, value_name = "PATH")]
        manifest: Option<PathBuf>,
    },

    /// Delete files a previous manifest referenced that the current one dropped
    Prune {
        /// Manifest from the previous build
        #[arg(short, long, value_name = "PATH")]
        previous: PathBuf,

        /// Current manifest file
        #[arg(short, long, value_name = "PATH")]
        manifest: Option<PathBuf>,

        /// Directory manifest filenames are relative to
        #[arg(short, long, value_name = "DIR")]
        base_dir: Option<PathBuf>,

        /// Dry run - show what would be deleted
        #[arg(long)]
        dry_run: bool,
    },

    /// Watch the manifest and prune after every rebuild
    Watch {
        /// Manifest file
        #[arg(short, long, value_name = "PATH")]
        manifest: Option<PathBuf>,

        /// Directory manifest filenames are relative to
        #[arg(short, long, value_name = "DIR")]
        base_dir: Option<PathBuf>,

        /// Dry run - show what would be deleted
        #[arg(long)]
        dry_run: bool,
    },
}
