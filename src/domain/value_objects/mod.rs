//! Value Objects

mod path;

pub use path::{normalize_lexically, resolve_path};
