//! Markdown file discovery

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension of the documents that are updated
const MARKDOWN_EXTENSION: &str = "md";

fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(MARKDOWN_EXTENSION)
}

/// All `.md` files below `dir`, recursively, in file-name order
pub fn discover_markdown(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|e| e.file_type().is_file() && is_markdown(e.path()))
        .map(walkdir::DirEntry::into_path)
        .collect()
}
