//! ManifestStore port - abstraction over the build manifest
//!
//! The store owns the manifest's location and format, and performs the
//! deletion of files the manifest used to reference.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::Manifest;

use super::file_system::FsError;

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Manifest operation errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest exists but could not be read
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Manifest content is malformed
    #[error("invalid manifest {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A stale file could not be removed
    #[error("failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: FsError,
    },
}

/// Abstract manifest store
///
/// Implementations:
/// - `JsonManifestStore` - JSON manifest on disk
/// - `DryRunStore` - records removals instead of performing them
pub trait ManifestStore {
    /// Whether the manifest is present
    fn exists(&self) -> bool;

    /// Read and parse the manifest
    fn read(&self) -> ManifestResult<Manifest>;

    /// Delete the file at `path`; a file that is already gone is not an error
    fn remove(&self, path: &Path) -> ManifestResult<()>;
}

impl<T: ManifestStore + ?Sized> ManifestStore for &T {
    fn exists(&self) -> bool {
        (**self).exists()
    }

    fn read(&self) -> ManifestResult<Manifest> {
        (**self).read()
    }

    fn remove(&self, path: &Path) -> ManifestResult<()> {
        (**self).remove(path)
    }
}

#[cfg(test)]
pub use in_memory::InMemoryManifestStore;
