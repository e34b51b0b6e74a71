//! Watch command handler

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use assetprune::presentation::factory::create_watch_use_case;
use assetprune::WatchEvent;

/// Execute the watch command (blocks until Ctrl+C)
pub fn cmd_watch(
    config_path: Option<&Path>,
    manifest: Option<PathBuf>,
    base_dir: Option<PathBuf>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let config = super::load_config(config_path, manifest, base_dir)?;
    let use_case = create_watch_use_case(&config, dry_run);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    use_case.start(running, |event| {
        if json {
            println!("{}", event.to_json());
        } else if let Some(line) = render_event(&event) {
            println!("{}", line);
        }
    })?;

    Ok(())
}

fn render_event(event: &WatchEvent) -> Option<String> {
    let line = match event {
        WatchEvent::WatchStarted {
            manifest,
            base_dir,
            dry_run,
        } => format!(
            "Watching {} (base {}){}. Press Ctrl+C to stop.",
            manifest,
            base_dir,
            if *dry_run { ", dry run" } else { "" }
        ),
        WatchEvent::Recorded { files } => format!("Recorded {} file(s).", files),
        WatchEvent::ManifestMissing { manifest } => {
            format!("Manifest not found: {} (waiting for a build)", manifest)
        }
        WatchEvent::ManifestChanged => return None,
        WatchEvent::FileRemoved { path, dry_run } => {
            if *dry_run {
                format!("  would remove {}", path)
            } else {
                format!("  removed {}", path)
            }
        }
        WatchEvent::PruneComplete {
            removed,
            retained,
            current,
        } => format!(
            "Pruned {} stale file(s), kept {}, tracking {}.",
            removed, retained, current
        ),
        WatchEvent::Error { message } => format!("Error: {}", message),
        WatchEvent::Shutdown => "Stopped.".to_string(),
    };
    Some(line)
}
