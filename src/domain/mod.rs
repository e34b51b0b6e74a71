//! Domain Layer
//!
//! The core of assetprune - snapshot and prune logic without direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Manifest, ChunkAssets)
//! - `value_objects/` - Immutable value types (path resolution)
//! - `services/` - Domain services (VersionTracker)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No file access** - Manifest reads and deletions only happen through ports.
//!    The one ambient input is the working directory, which `resolve_path`
//!    uses to anchor relative paths.
//! 2. **Ports & Adapters** - Manifest access and deletion go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
