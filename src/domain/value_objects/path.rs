//! Path resolution for manifest filenames
//!
//! Manifest entries are relative to the output directory. Resolution joins
//! them onto a base directory, anchors the result at the working directory
//! when it is still relative, and folds `.`/`..` segments without touching
//! the file system.

use std::path::{Component, Path, PathBuf};

/// Resolve `file` against `base_dir`
///
/// An absolute `file` is returned as-is (normalized). A relative result is
/// made absolute against the current working directory.
pub fn resolve_path(base_dir: &Path, file: &str) -> PathBuf {
    let joined = base_dir.join(file);
    let absolute = if joined.is_absolute() {
        joined
    } else {
        std::path::absolute(&joined).unwrap_or(joined)
    };
    normalize_lexically(&absolute)
}

/// Fold `.` and `..` components
///
/// `..` never climbs above the root of an absolute path. Leading `..` in a
/// relative path are kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
