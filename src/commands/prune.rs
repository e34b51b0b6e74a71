//! Prune command handler
//!
//! Removes files referenced by a previous manifest that the current manifest
//! no longer references.

use std::path::{Path, PathBuf};

use anyhow::Result;

use assetprune::application::PruneOptions;
use assetprune::presentation::factory::create_prune_use_case;
use assetprune::presentation::output::{render_prune, OutputFormat};
use assetprune::JsonManifestStore;

/// Execute the prune command
pub fn cmd_prune(
    config_path: Option<&Path>,
    previous: &Path,
    manifest: Option<PathBuf>,
    base_dir: Option<PathBuf>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let config = super::load_config(config_path, manifest, base_dir)?;
    let use_case = create_prune_use_case(&config);
    let options = PruneOptions::new(config.base_dir()).with_dry_run(dry_run);

    let result = use_case.execute(JsonManifestStore::new(previous), &options)?;

    for line in render_prune(OutputFormat::from_json_flag(json), &config.manifest, &result) {
        println!("{}", line);
    }

    Ok(())
}
