//! assetprune - versioned build asset tracking and pruning
//!
//! A build writes a chunk manifest mapping chunk names to the versioned files
//! it emitted. assetprune records that file list, and after the next build
//! deletes the files the new manifest no longer references.
//!
//! ```no_run
//! use assetprune::{JsonManifestStore, VersionTracker};
//!
//! # fn main() -> Result<(), assetprune::ManifestError> {
//! let mut tracker = VersionTracker::new(JsonManifestStore::new("public/manifest.json"));
//! tracker.enable().record()?;
//!
//! // ... rebuild ...
//!
//! if let Some(report) = tracker.prune("public".as_ref())? {
//!     println!("removed {} stale file(s)", report.removed.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{PruneOptions, PruneResult, PruneUseCase, WatchEvent, WatchOptions, WatchUseCase};
pub use config::Config;
pub use domain::entities::{ChunkAssets, Manifest};
pub use domain::ports::{FileSystem, ManifestError, ManifestResult, ManifestStore};
pub use domain::services::{PruneReport, VersionTracker};
pub use error::{AssetPruneError, AssetPruneResult};
pub use infrastructure::{DryRunStore, JsonManifestStore, LocalFs};
