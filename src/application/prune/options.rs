//! Prune options

use std::path::PathBuf;

/// Options for the prune command
#[derive(Debug, Clone, Default)]
pub struct PruneOptions {
    /// Directory manifest filenames are resolved against
    pub base_dir: PathBuf,
    /// Whether this is a dry run (no actual deletion)
    pub dry_run: bool,
}

impl PruneOptions {
    /// Create new prune options
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            dry_run: false,
        }
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
