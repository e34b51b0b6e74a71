//! Common test utilities for assetprune CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Assertion macros: `assert_exists!`, `assert_missing!`
//! - Fixtures: Manifest content helpers
//! - `MemoryStore`: in-memory manifest store for library-level tests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod memory_store;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
pub use memory_store::MemoryStore;
