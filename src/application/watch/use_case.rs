//! Watch Use Case implementation

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::Duration;

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use crate::domain::ports::ManifestStore;
use crate::domain::services::VersionTracker;
use crate::error::AssetPruneResult;
use crate::infrastructure::manifest::{DryRunStore, JsonManifestStore};

use super::event::{WatchEvent, WatchOptions, WatcherState};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Watch Use Case
///
/// Prunes stale outputs every time the manifest is rewritten.
/// This is the main entry point for the `assetprune watch` command.
pub struct WatchUseCase {
    options: WatchOptions,
}

impl WatchUseCase {
    /// Create a new WatchUseCase
    pub fn new(options: WatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    /// Start watching (blocking)
    ///
    /// This method blocks until the running flag is set to false.
    /// Use the callback to receive events.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> AssetPruneResult<()>
    where
        F: Fn(WatchEvent),
    {
        let store = JsonManifestStore::new(&self.options.manifest);
        if self.options.dry_run {
            self.run(DryRunStore::new(store), running, &on_event)
        } else {
            self.run(store, running, &on_event)
        }
    }

    fn run<M, F>(&self, store: M, running: Arc<AtomicBool>, on_event: &F) -> AssetPruneResult<()>
    where
        M: ManifestStore,
        F: Fn(WatchEvent),
    {
        on_event(WatchEvent::WatchStarted {
            manifest: self.options.manifest.display().to_string(),
            base_dir: self.options.base_dir.display().to_string(),
            dry_run: self.options.dry_run,
        });

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            notify::Config::default(),
        )?;
        // Watch before the first snapshot so a manifest written in between
        // still produces an event.
        watcher.watch(&self.watch_dir(), RecursiveMode::NonRecursive)?;

        let mut tracker = VersionTracker::new(store);
        tracker.enable();
        match tracker.record() {
            Ok(Some(recorded)) => on_event(WatchEvent::Recorded {
                files: recorded.files().len(),
            }),
            Ok(None) => on_event(self.missing_event()),
            Err(e) => {
                warn!("initial record failed: {}", e);
                on_event(WatchEvent::Error {
                    message: e.to_string(),
                });
            }
        }

        let manifest_name = self.options.manifest.file_name().map(|n| n.to_os_string());
        let mut state = WatcherState::new();

        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(POLL_INTERVAL) {
                if path.file_name() == manifest_name.as_deref() {
                    debug!(path = %path.display(), "manifest event");
                    state.add_change(path);
                }
            }

            if state.should_prune(self.options.debounce) {
                state.take_changes();
                on_event(WatchEvent::ManifestChanged);
                self.prune_and_report(&mut tracker, on_event);
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    /// Run one prune pass, turning every outcome into events
    ///
    /// Errors are reported and swallowed so one bad rewrite does not end the
    /// watch.
    pub(super) fn prune_and_report<M, F>(&self, tracker: &mut VersionTracker<M>, on_event: &F)
    where
        M: ManifestStore,
        F: Fn(WatchEvent),
    {
        match tracker.prune(&self.options.base_dir) {
            Ok(Some(report)) => {
                for path in &report.removed {
                    on_event(WatchEvent::FileRemoved {
                        path: path.display().to_string(),
                        dry_run: self.options.dry_run,
                    });
                }
                on_event(WatchEvent::PruneComplete {
                    removed: report.removed.len(),
                    retained: report.retained.len(),
                    current: tracker.files().len(),
                });
            }
            Ok(None) => on_event(self.missing_event()),
            Err(e) => {
                warn!("prune failed: {}", e);
                on_event(WatchEvent::Error {
                    message: e.to_string(),
                });
            }
        }
    }

    fn missing_event(&self) -> WatchEvent {
        WatchEvent::ManifestMissing {
            manifest: self.options.manifest.display().to_string(),
        }
    }

    /// Directory holding the manifest
    fn watch_dir(&self) -> PathBuf {
        match self.options.manifest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        }
    }
}
