//! JSON Manifest Store
//!
//! Implements the ManifestStore port for a JSON manifest on disk.

use std::path::{Path, PathBuf};

use crate::domain::entities::Manifest;
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::manifest_store::{ManifestError, ManifestResult, ManifestStore};
use crate::infrastructure::fs::LocalFs;

/// JSON manifest stored at a fixed path
#[derive(Debug, Clone)]
pub struct JsonManifestStore<FS = LocalFs> {
    path: PathBuf,
    fs: FS,
}

impl JsonManifestStore<LocalFs> {
    /// Create a store backed by the local file system
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(path, LocalFs::new())
    }
}

impl<FS: FileSystem> JsonManifestStore<FS> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(path: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    /// Location of the manifest
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<FS: FileSystem> ManifestStore for JsonManifestStore<FS> {
    fn exists(&self) -> bool {
        self.fs.exists(&self.path)
    }

    fn read(&self) -> ManifestResult<Manifest> {
        let content = self.fs.read(&self.path).map_err(|source| ManifestError::Read {
            path: self.path.clone(),
            source,
        })?;

        Manifest::from_json(&content).map_err(|e| ManifestError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn remove(&self, path: &Path) -> ManifestResult<()> {
        match self.fs.remove(path) {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(source) => Err(ManifestError::Remove {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
