//! Command handlers for the assetprune binary

pub mod prune;
pub mod record;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use assetprune::Config;

/// Resolve configuration for a command: files and env first, then CLI flags
pub fn load_config(
    explicit: Option<&Path>,
    manifest: Option<PathBuf>,
    base_dir: Option<PathBuf>,
) -> Result<Config> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = Config::resolve(explicit, Some(&cwd)).context("failed to load config")?;

    Ok(config.with_manifest(manifest).with_base_dir(base_dir))
}
