//! Watch Use Case
//!
//! Keeps an output directory clean while a build runs in watch mode:
//! - Records the manifest once at startup
//! - Monitors the manifest file (via `notify` crate)
//! - Debounces rewrites (100ms default)
//! - Prunes stale files after each rewrite
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new(manifest, base_dir);
//! let use_case = WatchUseCase::new(options);
//! use_case.start(running, |event| { ... });
//! ```

mod event;
mod use_case;


pub use event::{WatchEvent, WatchOptions, WatcherState};
pub use use_case::WatchUseCase;
