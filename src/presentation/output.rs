//! Output Rendering
//!
//! Renders use case results as human-readable text or NDJSON.

use std::path::Path;

use serde_json::json;

use crate::application::PruneResult;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render a recorded snapshot
pub fn render_snapshot(format: OutputFormat, manifest: &Path, files: Option<&[String]>) -> String {
    match (format, files) {
        (OutputFormat::Json, Some(files)) => json!({
            "type": "recorded",
            "manifest": manifest.display().to_string(),
            "files": files,
        })
        .to_string(),
        (OutputFormat::Json, None) => json!({
            "type": "manifest_missing",
            "manifest": manifest.display().to_string(),
        })
        .to_string(),
        (OutputFormat::Text, Some(files)) => {
            let mut out = format!("{} file(s) in {}", files.len(), manifest.display());
            for file in files {
                out.push_str("\n  ");
                out.push_str(file);
            }
            out
        }
        (OutputFormat::Text, None) => format!("Manifest not found: {}", manifest.display()),
    }
}

/// Render a prune result, one line per entry
pub fn render_prune(format: OutputFormat, manifest: &Path, result: &PruneResult) -> Vec<String> {
    match format {
        OutputFormat::Json => render_prune_json(manifest, result),
        OutputFormat::Text => render_prune_text(manifest, result),
    }
}

fn render_prune_json(manifest: &Path, result: &PruneResult) -> Vec<String> {
    if result.manifest_missing {
        return vec![json!({
            "type": "manifest_missing",
            "manifest": manifest.display().to_string(),
        })
        .to_string()];
    }

    let mut lines: Vec<String> = result
        .removed
        .iter()
        .map(|path| {
            json!({
                "type": "file_removed",
                "path": path.display().to_string(),
                "dry_run": result.dry_run,
            })
            .to_string()
        })
        .collect();
    lines.push(
        json!({
            "type": "prune_complete",
            "removed": result.removed.len(),
            "retained": result.retained.len(),
            "current": result.current.len(),
            "dry_run": result.dry_run,
        })
        .to_string(),
    );
    lines
}

fn render_prune_text(manifest: &Path, result: &PruneResult) -> Vec<String> {
    if result.manifest_missing {
        return vec![format!(
            "Manifest not found: {} (nothing pruned)",
            manifest.display()
        )];
    }

    let verb = if result.dry_run { "Would remove" } else { "Removed" };
    let mut lines: Vec<String> = result
        .removed
        .iter()
        .map(|path| format!("{} {}", verb, path.display()))
        .collect();

    if result.removed.is_empty() {
        lines.push("No stale files.".to_string());
    } else {
        lines.push(format!(
            "{} {} stale file(s), kept {}.",
            verb,
            result.removed.len(),
            result.retained.len()
        ));
    }
    lines
}
