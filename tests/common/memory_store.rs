//! In-memory `ManifestStore` for driving `VersionTracker` without a disk.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use assetprune::domain::ports::{FsError, ManifestError, ManifestResult, ManifestStore};
use assetprune::Manifest;

/// Holds an optional manifest and records every removal request.
#[derive(Debug, Default)]
pub struct MemoryStore {
    manifest: RefCell<Option<Manifest>>,
    removed: RefCell<Vec<PathBuf>>,
}

impl MemoryStore {
    pub fn with_manifest(manifest: Manifest) -> Self {
        Self {
            manifest: RefCell::new(Some(manifest)),
            removed: RefCell::default(),
        }
    }

    /// Replace the manifest, as a new build would
    pub fn publish(&self, manifest: Manifest) {
        *self.manifest.borrow_mut() = Some(manifest);
    }

    /// Delete the manifest
    pub fn clear(&self) {
        *self.manifest.borrow_mut() = None;
    }

    /// Paths passed to `remove`, in call order
    pub fn removed(&self) -> Vec<PathBuf> {
        self.removed.borrow().clone()
    }
}

impl ManifestStore for MemoryStore {
    fn exists(&self) -> bool {
        self.manifest.borrow().is_some()
    }

    fn read(&self) -> ManifestResult<Manifest> {
        self.manifest.borrow().clone().ok_or_else(|| ManifestError::Read {
            path: PathBuf::from("<memory>"),
            source: FsError::NotFound(PathBuf::from("<memory>")),
        })
    }

    fn remove(&self, path: &Path) -> ManifestResult<()> {
        self.removed.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
