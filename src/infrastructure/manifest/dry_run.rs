//! Dry-run Manifest Store
//!
//! Wraps another store: manifest reads pass through, removals are only
//! recorded.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::entities::Manifest;
use crate::domain::ports::manifest_store::{ManifestResult, ManifestStore};

/// Store decorator that never deletes
#[derive(Debug)]
pub struct DryRunStore<S> {
    inner: S,
    planned: RefCell<Vec<PathBuf>>,
}

impl<S: ManifestStore> DryRunStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            planned: RefCell::new(Vec::new()),
        }
    }

    /// Paths that would have been removed, in request order
    pub fn planned(&self) -> Vec<PathBuf> {
        self.planned.borrow().clone()
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ManifestStore> ManifestStore for DryRunStore<S> {
    fn exists(&self) -> bool {
        self.inner.exists()
    }

    fn read(&self) -> ManifestResult<Manifest> {
        self.inner.read()
    }

    fn remove(&self, path: &Path) -> ManifestResult<()> {
        info!(path = %path.display(), "dry run: would remove");
        self.planned.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
