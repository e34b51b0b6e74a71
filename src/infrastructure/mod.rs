//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local)
//! - `manifest/` - Manifest store implementations (JSON, dry-run)

pub mod fs;
pub mod manifest;

// Re-export for convenience
pub use fs::LocalFs;
pub use manifest::{DryRunStore, JsonManifestStore};
