//! Configuration module for assetprune
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSETPRUNE_*)
//! 3. Explicit `--config` file, or project config (./assetprune.toml)
//! 4. User config (<config dir>/assetprune/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, WatchConfig, DEFAULT_DEBOUNCE_MS, DEFAULT_MANIFEST};
