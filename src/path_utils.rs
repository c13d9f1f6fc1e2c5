//! Cross-platform path utilities
//!
//! Commit history queries and console output both want `/`-separated paths
//! relative to some root, regardless of platform.

use std::path::Path;

/// Convert a path to a string with forward slashes
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Path of `path` relative to `root` with forward slashes.
///
/// Both sides are canonicalized first so `..` segments and symlinked
/// directories compare correctly. Returns `None` when `path` is outside
/// `root` or either side cannot be canonicalized.
pub fn repository_relative(path: &Path, root: &Path) -> Option<String> {
    let path = dunce::canonicalize(path).ok()?;
    let root = dunce::canonicalize(root).ok()?;
    let relative = path.strip_prefix(&root).ok()?;
    Some(to_forward_slashes(relative))
}

/// Path shown to the user: relative to `base` when possible, else as given
pub fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map_or_else(|_| to_forward_slashes(path), to_forward_slashes)
}
