//! Domain Services
//!
//! Business logic that operates on domain entities through ports.

mod version_tracker;

pub use version_tracker::{PruneReport, VersionTracker};
