//! Read-only git repository lookups
//!
//! Only used to pick sensible defaults: the work tree root (against which
//! commit paths are computed) and the owner/name of the `origin` remote.

use normpath::PathExt;
use std::path::{Path, PathBuf};

/// Find the git work tree root containing `start`
pub fn find_repository_root(start: &Path) -> Option<PathBuf> {
    let repo = git2::Repository::discover(start).ok()?;
    // normalize for symlinked temp dirs (macOS /var -> /private/var)
    repo.workdir().map(|p| {
        p.normalize()
            .map(normpath::BasePathBuf::into_path_buf)
            .unwrap_or_else(|_| p.to_path_buf())
    })
}

/// Owner and repository name of the `origin` remote, if it has a parsable URL
pub fn discover_origin(start: &Path) -> Option<(String, String)> {
    let repo = git2::Repository::discover(start).ok()?;
    let remote = repo.find_remote("origin").ok()?;
    let url = remote.url()?;
    let parsed = parse_remote_url(url);
    if parsed.is_none() {
        log::debug!("origin remote '{url}' does not name an owner/repository");
    }
    parsed
}

/// Split a remote URL into `(owner, repo)`.
///
/// Handles `https://host/owner/repo(.git)`, `ssh://git@host/owner/repo` and
/// scp-like `git@host:owner/repo.git`.
pub fn parse_remote_url(url: &str) -> Option<(String, String)> {
    let url = url.trim().trim_end_matches('/');
    let url = url.strip_suffix(".git").unwrap_or(url);

    let path = if let Some(scheme_end) = url.find("://") {
        let after_scheme = &url[scheme_end + 3..];
        &after_scheme[after_scheme.find('/')? + 1..]
    } else if let Some(colon) = url.find(':') {
        &url[colon + 1..]
    } else {
        return None;
    };

    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match parts.as_slice() {
        [.., owner, repo] => Some(((*owner).to_string(), (*repo).to_string())),
        _ => None,
    }
}
