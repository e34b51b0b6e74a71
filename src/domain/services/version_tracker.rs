//! Version Tracker
//!
//! Records the versioned files a build emitted, and prunes the ones a newer
//! build no longer references.
//!
//! A tracker holds one snapshot: the flattened filename list of the manifest
//! at the time of the last `record()`. `prune()` takes a fresh snapshot,
//! deletes every file that only exists in the held one, and then adopts the
//! fresh snapshot. Identity is by filename; content is never compared.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::ports::{ManifestResult, ManifestStore};
use crate::domain::value_objects::resolve_path;

/// Outcome of a prune pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    /// Resolved paths handed to the store for removal, in snapshot order
    pub removed: Vec<PathBuf>,
    /// Previous filenames that are still referenced
    pub retained: Vec<String>,
}

impl PruneReport {
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Tracks the versioned files referenced by a manifest
#[derive(Debug)]
pub struct VersionTracker<M> {
    enabled: bool,
    manifest: M,
    files: Vec<String>,
}

impl<M: ManifestStore> VersionTracker<M> {
    /// Create an unrecorded tracker over `manifest`
    pub fn new(manifest: M) -> Self {
        Self {
            enabled: false,
            manifest,
            files: Vec::new(),
        }
    }

    /// Create a tracker that already holds a snapshot taken elsewhere
    pub fn with_files(manifest: M, files: Vec<String>) -> Self {
        Self {
            enabled: false,
            manifest,
            files,
        }
    }

    /// Mark tracking as enabled
    ///
    /// The flag is for callers deciding whether to track at all; the tracker
    /// itself behaves the same either way.
    pub fn enable(&mut self) -> &mut Self {
        self.enabled = true;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The held snapshot
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn manifest(&self) -> &M {
        &self.manifest
    }

    /// Replace the held snapshot with the manifest's current file list
    ///
    /// Returns `Ok(None)` without touching the snapshot when the manifest does
    /// not exist.
    pub fn record(&mut self) -> ManifestResult<Option<&mut Self>> {
        if !self.manifest.exists() {
            debug!("manifest not found, nothing recorded");
            return Ok(None);
        }

        let manifest = self.manifest.read()?;

        self.reset();
        self.files.extend(manifest.files().map(str::to_string));
        debug!(files = self.files.len(), "recorded manifest snapshot");

        Ok(Some(self))
    }

    /// Forget the held snapshot
    pub fn reset(&mut self) -> &mut Self {
        self.files.clear();
        self
    }

    /// Delete files that the current manifest no longer references
    ///
    /// Filenames are resolved against `base_dir` before removal. Returns
    /// `Ok(None)` and leaves the snapshot untouched when the manifest does not
    /// exist. A failed removal stops the pass and is returned as-is; the held
    /// snapshot is then left unchanged.
    pub fn prune(&mut self, base_dir: &Path) -> ManifestResult<Option<PruneReport>> {
        let mut updated = VersionTracker::new(&self.manifest);
        let Some(updated) = updated.enable().record()? else {
            return Ok(None);
        };

        let current: HashSet<&str> = updated.files.iter().map(String::as_str).collect();
        let mut report = PruneReport::default();

        for file in &self.files {
            if current.contains(file.as_str()) {
                debug!(file = %file, "still referenced");
                report.retained.push(file.clone());
                continue;
            }

            let path = resolve_path(base_dir, file);
            self.manifest.remove(&path)?;
            info!(path = %path.display(), "removed stale asset");
            report.removed.push(path);
        }

        self.files = std::mem::take(&mut updated.files);

        Ok(Some(report))
    }
}
