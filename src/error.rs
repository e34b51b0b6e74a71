//! Error types for assetprune
//!
//! Uses `thiserror` for library errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::ManifestError;

/// Result type alias for assetprune operations
pub type AssetPruneResult<T> = Result<T, AssetPruneError>;

/// Main error type for assetprune operations
#[derive(Error, Debug)]
pub enum AssetPruneError {
    /// Manifest could not be read, parsed, or a stale file could not be removed
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// File watcher could not be set up
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),
}
