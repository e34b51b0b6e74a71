//! FileSystem port
//!
//! The manifest store reads the manifest and deletes stale outputs through
//! this trait, so it can run against a mock in tests.

use std::io;
use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
///
/// Every variant keeps the path it was raised for.
#[derive(Debug)]
pub enum FsError {
    /// Nothing at the path
    NotFound(PathBuf),
    /// The OS refused access
    PermissionDenied(PathBuf),
    /// Any other OS error
    Io { path: PathBuf, source: io::Error },
}

impl FsError {
    /// Classify an OS error raised for `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path),
            _ => FsError::Io { path, source: err },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }

    /// Path the error refers to
    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound(path) | FsError::PermissionDenied(path) => path,
            FsError::Io { path, .. } => path,
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "{}: no such file", path.display()),
            FsError::PermissionDenied(path) => write!(f, "{}: permission denied", path.display()),
            FsError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - `std::fs`
/// - `RefCell`-backed mocks in tests
pub trait FileSystem {
    /// Read a UTF-8 file
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Whether a regular file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Delete a regular file
    fn remove(&self, path: &Path) -> FsResult<()>;
}
