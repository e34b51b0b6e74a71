//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AssetPruneResult;

use super::loader::{self, ConfigWarning};

/// Default manifest location, relative to the working directory
pub const DEFAULT_MANIFEST: &str = "public/manifest.json";

/// Default watch debounce in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Watch configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_manifest() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST)
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Manifest file path
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Directory manifest filenames are relative to
    ///
    /// Defaults to the manifest's parent directory.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    #[serde(default)]
    pub watch: WatchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            base_dir: None,
            watch: WatchConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AssetPruneResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> AssetPruneResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, with env overrides
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Load an explicit config file (errors propagate), or discover one
    pub fn resolve(explicit: Option<&Path>, project_root: Option<&Path>) -> AssetPruneResult<Self> {
        loader::resolve(explicit, project_root)
    }

    /// Override the manifest path (CLI flag)
    pub fn with_manifest(mut self, manifest: Option<PathBuf>) -> Self {
        if let Some(manifest) = manifest {
            self.manifest = manifest;
        }
        self
    }

    /// Override the base directory (CLI flag)
    pub fn with_base_dir(mut self, base_dir: Option<PathBuf>) -> Self {
        if base_dir.is_some() {
            self.base_dir = base_dir;
        }
        self
    }

    /// Effective base directory
    pub fn base_dir(&self) -> PathBuf {
        if let Some(base_dir) = &self.base_dir {
            return base_dir.clone();
        }
        match self.manifest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.watch.debounce_ms)
    }
}
