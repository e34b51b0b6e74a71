//! Manifest Store Implementations
//!
//! Concrete implementations of the ManifestStore port.

mod dry_run;
mod json;

pub use dry_run::DryRunStore;
pub use json::JsonManifestStore;
