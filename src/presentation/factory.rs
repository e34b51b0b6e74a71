//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{PruneUseCase, WatchOptions, WatchUseCase};
use crate::config::Config;
use crate::infrastructure::JsonManifestStore;

/// Type alias for the concrete PruneUseCase with all dependencies
pub type ConcretePruneUseCase = PruneUseCase<JsonManifestStore>;

/// Create a prune use case over the configured manifest
pub fn create_prune_use_case(config: &Config) -> ConcretePruneUseCase {
    PruneUseCase::new(JsonManifestStore::new(&config.manifest))
}

/// Create a watch use case from configuration
pub fn create_watch_use_case(config: &Config, dry_run: bool) -> WatchUseCase {
    WatchUseCase::new(WatchOptions::from_config(config).with_dry_run(dry_run))
}
