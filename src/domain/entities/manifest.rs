//! Manifest Entity
//!
//! The chunk manifest emitted by a build: each chunk name maps to the
//! versioned file (or files) the build produced for it.

use serde::Deserialize;

/// Name of the manifest member holding the chunk mapping
pub const ASSETS_BY_CHUNK_NAME: &str = "assetsByChunkName";

/// Files emitted for a single chunk
///
/// Builds write either one filename or an ordered list of filenames per chunk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ChunkAssets {
    Single(String),
    Multiple(Vec<String>),
}

impl ChunkAssets {
    /// Filenames in emission order
    pub fn files(&self) -> &[String] {
        match self {
            ChunkAssets::Single(file) => std::slice::from_ref(file),
            ChunkAssets::Multiple(files) => files,
        }
    }
}

impl From<&str> for ChunkAssets {
    fn from(file: &str) -> Self {
        ChunkAssets::Single(file.to_string())
    }
}

impl From<String> for ChunkAssets {
    fn from(file: String) -> Self {
        ChunkAssets::Single(file)
    }
}

impl From<Vec<String>> for ChunkAssets {
    fn from(files: Vec<String>) -> Self {
        ChunkAssets::Multiple(files)
    }
}

impl From<Vec<&str>> for ChunkAssets {
    fn from(files: Vec<&str>) -> Self {
        ChunkAssets::Multiple(files.into_iter().map(str::to_string).collect())
    }
}

/// Parsed chunk manifest
///
/// Chunks keep the order in which they appear in the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    chunks: Vec<(String, ChunkAssets)>,
}

impl Manifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk (builder style)
    pub fn with_chunk(mut self, name: impl Into<String>, assets: impl Into<ChunkAssets>) -> Self {
        self.insert(name, assets);
        self
    }

    /// Set the assets for a chunk, replacing an existing entry in place
    pub fn insert(&mut self, name: impl Into<String>, assets: impl Into<ChunkAssets>) {
        let name = name.into();
        let assets = assets.into();
        match self.chunks.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = assets,
            None => self.chunks.push((name, assets)),
        }
    }

    /// Iterate chunks in manifest order
    pub fn chunks(&self) -> impl Iterator<Item = (&str, &ChunkAssets)> {
        self.chunks.iter().map(|(name, assets)| (name.as_str(), assets))
    }

    /// Flatten every chunk into a single filename sequence
    ///
    /// Order is chunk order first, then the order within each chunk.
    /// Duplicates are kept.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.chunks
            .iter()
            .flat_map(|(_, assets)| assets.files().iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Parse a manifest document
    ///
    /// The document must be a JSON object with an `assetsByChunkName` member
    /// whose values are strings or arrays of strings. Other members are ignored.
    ///
    /// Chunks keep document order, except that integer-like names (`"0"`,
    /// `"12"`) come first in ascending numeric order, the way JavaScript
    /// enumerates object keys.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        struct RawManifest {
            #[serde(rename = "assetsByChunkName")]
            assets_by_chunk_name: serde_json::Map<String, serde_json::Value>,
        }

        let raw: RawManifest = serde_json::from_str(content)?;
        let mut manifest = Manifest::new();
        for (name, value) in raw.assets_by_chunk_name {
            let assets: ChunkAssets = serde_json::from_value(value)?;
            manifest.chunks.push((name, assets));
        }
        manifest
            .chunks
            .sort_by_key(|(name, _)| array_index(name).map_or((1, 0), |index| (0, index)));
        Ok(manifest)
    }

    /// Serialize back to the on-disk document shape
    pub fn to_json(&self) -> serde_json::Value {
        let mut mapping = serde_json::Map::new();
        for (name, assets) in &self.chunks {
            let value = match assets {
                ChunkAssets::Single(file) => serde_json::Value::from(file.as_str()),
                ChunkAssets::Multiple(files) => serde_json::Value::from(files.clone()),
            };
            mapping.insert(name.clone(), value);
        }
        let mut document = serde_json::Map::new();
        document.insert(ASSETS_BY_CHUNK_NAME.to_string(), mapping.into());
        document.into()
    }
}

/// Canonical array index (`0..2^32-1`, no leading zeros)
fn array_index(key: &str) -> Option<u32> {
    let index: u32 = key.parse().ok()?;
    (index != u32::MAX && index.to_string() == key).then_some(index)
}
