//! Record command handler
//!
//! Prints the flattened file list of the current manifest.

use std::path::{Path, PathBuf};

use anyhow::Result;

use assetprune::presentation::factory::create_prune_use_case;
use assetprune::presentation::output::{render_snapshot, OutputFormat};

/// Execute the record command
pub fn cmd_record(config_path: Option<&Path>, manifest: Option<PathBuf>, json: bool) -> Result<()> {
    let config = super::load_config(config_path, manifest, None)?;
    let use_case = create_prune_use_case(&config);

    let snapshot = use_case.snapshot()?;
    println!(
        "{}",
        render_snapshot(
            OutputFormat::from_json_flag(json),
            &config.manifest,
            snapshot.as_deref()
        )
    );

    Ok(())
}
