//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PruneUseCase` - One-shot prune of files a previous manifest referenced
//! - `WatchUseCase` - Record once, then prune whenever the manifest changes

pub mod prune;
pub mod watch;

pub use prune::{PruneOptions, PruneResult, PruneUseCase};
pub use watch::{WatchEvent, WatchOptions, WatchUseCase, WatcherState};
