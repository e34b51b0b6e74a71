//! Prune Use Case
//!
//! Removes versioned files that a previous build emitted and the current
//! build no longer references.
//!
//! This module handles:
//! - Recording the previous snapshot
//! - Pruning against the current manifest
//! - Dry runs that report without deleting

mod options;
mod result;
mod use_case;

pub use options::PruneOptions;
pub use result::PruneResult;
pub use use_case::PruneUseCase;
