//! Watch event types and options

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::{Config, DEFAULT_DEBOUNCE_MS};

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Manifest file to watch
    pub manifest: PathBuf,
    /// Directory manifest filenames are resolved against
    pub base_dir: PathBuf,
    /// Quiet period after the last manifest event before pruning
    pub debounce: Duration,
    /// Report removals without deleting
    pub dry_run: bool,
}

impl WatchOptions {
    /// Create new watch options with minimal required fields
    pub fn new(manifest: impl Into<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
            base_dir: base_dir.into(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            dry_run: false,
        }
    }

    /// Build options from resolved configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.manifest.clone(), config.base_dir()).with_debounce(config.debounce())
    }

    /// Set the debounce period
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted {
        manifest: String,
        base_dir: String,
        dry_run: bool,
    },
    /// Snapshot recorded
    Recorded { files: usize },
    /// Manifest does not exist (yet)
    ManifestMissing { manifest: String },
    /// Manifest was rewritten
    ManifestChanged,
    /// Stale file removed (or would be, in dry run)
    FileRemoved { path: String, dry_run: bool },
    /// Prune pass completed
    PruneComplete {
        removed: usize,
        retained: usize,
        current: usize,
    },
    /// Error occurred
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Watcher state for debouncing
#[derive(Debug, Default)]
pub struct WatcherState {
    pending_changes: HashSet<PathBuf>,
    last_change: Option<Instant>,
}

impl WatcherState {
    /// Create a new watcher state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a manifest event
    pub fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    /// Check if the debounce period has passed and changes are pending
    pub fn should_prune(&self, debounce: Duration) -> bool {
        match self.last_change {
            Some(last) => !self.pending_changes.is_empty() && last.elapsed() >= debounce,
            None => false,
        }
    }

    /// Take all pending changes, resetting state
    pub fn take_changes(&mut self) -> Vec<PathBuf> {
        let changes: Vec<_> = self.pending_changes.drain().collect();
        self.last_change = None;
        changes
    }

    /// Check if there are pending changes
    pub fn has_pending(&self) -> bool {
        !self.pending_changes.is_empty()
    }
}
