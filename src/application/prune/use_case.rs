//! Prune Use Case
//!
//! Orchestrates a one-shot prune: the previous snapshot comes from an older
//! manifest, the current one from the live manifest.

use tracing::info;

use crate::domain::ports::ManifestStore;
use crate::domain::services::VersionTracker;
use crate::error::AssetPruneResult;
use crate::infrastructure::manifest::DryRunStore;

use super::options::PruneOptions;
use super::result::PruneResult;

/// Prune use case - removes files the current manifest no longer references
pub struct PruneUseCase<M>
where
    M: ManifestStore,
{
    current: M,
}

impl<M> PruneUseCase<M>
where
    M: ManifestStore,
{
    /// Create a new prune use case over the current manifest
    pub fn new(current: M) -> Self {
        Self { current }
    }

    /// Snapshot of the current manifest, or `None` when it does not exist
    pub fn snapshot(&self) -> AssetPruneResult<Option<Vec<String>>> {
        let mut tracker = VersionTracker::new(&self.current);
        let files = tracker
            .enable()
            .record()?
            .map(|recorded| recorded.files().to_vec());
        Ok(files)
    }

    /// Prune files referenced by `previous` that the current manifest dropped
    ///
    /// A missing previous manifest yields an empty previous snapshot, so
    /// nothing is removed.
    pub fn execute<P>(&self, previous: P, options: &PruneOptions) -> AssetPruneResult<PruneResult>
    where
        P: ManifestStore,
    {
        let mut previous_tracker = VersionTracker::new(previous);
        let previous_files = match previous_tracker.enable().record()? {
            Some(recorded) => recorded.files().to_vec(),
            None => {
                info!("previous manifest not found, nothing to compare against");
                Vec::new()
            }
        };

        if options.dry_run {
            self.prune_with(DryRunStore::new(&self.current), previous_files, options)
        } else {
            self.prune_with(&self.current, previous_files, options)
        }
    }

    fn prune_with<S>(
        &self,
        store: S,
        previous_files: Vec<String>,
        options: &PruneOptions,
    ) -> AssetPruneResult<PruneResult>
    where
        S: ManifestStore,
    {
        let mut tracker = VersionTracker::with_files(store, previous_files);
        tracker.enable();

        let result = match tracker.prune(&options.base_dir)? {
            Some(report) => {
                PruneResult::from_report(report, tracker.files().to_vec(), options.dry_run)
            }
            None => {
                info!("current manifest not found, skipping prune");
                PruneResult::missing(options.dry_run)
            }
        };

        Ok(result)
    }
}
