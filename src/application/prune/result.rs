//! Prune result types

use std::path::PathBuf;

use crate::domain::services::PruneReport;

/// Result of a prune operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneResult {
    /// Files that were removed (or would be removed in dry run)
    pub removed: Vec<PathBuf>,
    /// Previous files the current manifest still references
    pub retained: Vec<String>,
    /// Snapshot of the current manifest
    pub current: Vec<String>,
    /// The current manifest did not exist; nothing was done
    pub manifest_missing: bool,
    /// No files were actually deleted
    pub dry_run: bool,
}

impl PruneResult {
    /// Result for a pass skipped because the manifest is missing
    pub fn missing(dry_run: bool) -> Self {
        Self {
            manifest_missing: true,
            dry_run,
            ..Self::default()
        }
    }

    pub fn from_report(report: PruneReport, current: Vec<String>, dry_run: bool) -> Self {
        Self {
            removed: report.removed,
            retained: report.retained,
            current,
            manifest_missing: false,
            dry_run,
        }
    }

    /// Whether anything was (or would be) removed
    pub fn has_removals(&self) -> bool {
        !self.removed.is_empty()
    }
}
