//! Domain Entities

mod manifest;

pub use manifest::{ChunkAssets, Manifest, ASSETS_BY_CHUNK_NAME};
