//! Runtime configuration
//!
//! Settings come from command line flags with environment variable fallbacks
//! (handled by clap). This module turns them into the resolved values used by
//! the rest of the tool:
//! - [`RemoteConfig`]: which repository and branch to ask for commit dates
//! - [`DocsLayout`]: where the Markdown corpus lives on disk

mod repository;

use std::path::{Path, PathBuf};
use std::time::Duration;

pub use repository::{discover_origin, find_repository_root};

use crate::cli::UpdateOptions;
use crate::error::{Result, fs::io_error};

/// Default GitHub API endpoint
pub const DEFAULT_API_ROOT: &str = "https://api.github.com";

/// Repository owner used when neither flags nor `origin` name one
pub const DEFAULT_OWNER: &str = "Alivenderwww";

/// Repository name used when neither flags nor `origin` name one
pub const DEFAULT_REPO: &str = "Alivenderwww.github.io";

/// Branch queried for commit history
pub const DEFAULT_BRANCH: &str = "main";

/// Document root, relative to the project root
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Corpus subdirectory, relative to the document root
pub const DEFAULT_CORPUS_DIR: &str = "blogs";

/// Seconds to wait for one commit history request
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Commit history endpoint settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub api_root: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl RemoteConfig {
    /// Resolve remote settings for a project.
    ///
    /// Owner and repository fall back to the `origin` remote of the project's
    /// git repository, then to the built-in defaults.
    pub fn resolve(options: &UpdateOptions, project_root: &Path) -> Self {
        let origin = if options.owner.is_none() || options.repo.is_none() {
            discover_origin(project_root)
        } else {
            None
        };

        let (origin_owner, origin_repo) = origin.unzip();
        let owner = options
            .owner
            .clone()
            .or(origin_owner)
            .unwrap_or_else(|| DEFAULT_OWNER.to_string());
        let repo = options
            .repo
            .clone()
            .or(origin_repo)
            .unwrap_or_else(|| DEFAULT_REPO.to_string());

        Self {
            api_root: options.api_root.trim_end_matches('/').to_string(),
            owner,
            repo,
            branch: options.branch.clone(),
            token: options.token.clone().filter(|t| !t.trim().is_empty()),
            timeout: Duration::from_secs(options.timeout),
        }
    }

    /// URL of the commits listing for this repository
    pub fn commits_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/commits",
            self.api_root, self.owner, self.repo
        )
    }
}

/// On-disk layout of the Markdown corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsLayout {
    /// Repository root; commit paths are relative to it
    pub project_root: PathBuf,
    /// Document root; reported paths are relative to it
    pub docs_root: PathBuf,
    /// Name of the only subdirectory whose files are updated
    pub corpus_dir: String,
}

impl DocsLayout {
    pub fn new(project_root: PathBuf, docs_dir: &Path, corpus_dir: &str) -> Self {
        let docs_root = if docs_dir.is_absolute() {
            docs_dir.to_path_buf()
        } else {
            project_root.join(docs_dir)
        };
        Self {
            project_root,
            docs_root,
            corpus_dir: corpus_dir.to_string(),
        }
    }

    /// Directory that is scanned for `.md` files
    pub fn corpus_root(&self) -> PathBuf {
        self.docs_root.join(&self.corpus_dir)
    }
}

/// Determine the project root.
///
/// An explicit path wins; otherwise the work tree of the git repository that
/// contains the current directory; otherwise the current directory itself.
pub fn resolve_project_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    let cwd = std::env::current_dir()
        .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?;

    Ok(find_repository_root(&cwd).unwrap_or(cwd))
}
