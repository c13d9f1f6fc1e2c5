//! Commit-history strategy with per-run caching and warning deduplication

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use console::Style;

use super::{
    CommitLookup, CommitSource, ResolutionCache, TimestampRecord, TimestampSource,
    TimestampStrategy, WarningKind, WarningLedger,
};
use crate::error::Result;
use crate::path_utils::repository_relative;

/// Resolves timestamps from the newest commit touching a file.
///
/// Outcomes are cached per repository-relative path, including "no result",
/// so each path costs at most one request per run.
pub struct RemoteStrategy {
    source: Box<dyn CommitSource>,
    repo_root: PathBuf,
    cache: ResolutionCache,
    ledger: WarningLedger,
}

impl RemoteStrategy {
    pub fn new(source: Box<dyn CommitSource>, repo_root: PathBuf) -> Self {
        Self {
            source,
            repo_root,
            cache: ResolutionCache::new(),
            ledger: WarningLedger::new(),
        }
    }

    #[allow(dead_code)] // used in tests
    pub fn ledger(&self) -> &WarningLedger {
        &self.ledger
    }

    fn lookup(&mut self, relative_path: &str) -> Option<DateTime<Utc>> {
        match self.source.latest_commit(relative_path) {
            CommitLookup::Found(instant) => Some(instant),
            CommitLookup::Empty => {
                log::debug!("{relative_path}: no commits on the remote branch");
                None
            }
            CommitLookup::RateLimited => {
                self.warn(WarningKind::RateLimited, relative_path);
                None
            }
            CommitLookup::NotFound => {
                self.warn(WarningKind::NotFound, relative_path);
                None
            }
            CommitLookup::Failed(reason) => {
                log::debug!("{relative_path}: commit lookup failed: {reason}");
                None
            }
        }
    }

    fn warn(&mut self, kind: WarningKind, relative_path: &str) {
        log::debug!("{relative_path}: commit lookup answered {}", kind.key());
        if let Some(message) = self.ledger.record(kind) {
            eprintln!("{} {}", Style::new().bold().yellow().apply_to("Warning:"), message);
        }
    }
}

impl TimestampStrategy for RemoteStrategy {
    fn name(&self) -> &'static str {
        "commit history"
    }

    fn resolve(&mut self, path: &Path) -> Result<Option<TimestampRecord>> {
        let Some(relative_path) = repository_relative(path, &self.repo_root) else {
            log::debug!(
                "{} is outside {}, skipping commit lookup",
                path.display(),
                self.repo_root.display()
            );
            return Ok(None);
        };

        let outcome = if let Some(cached) = self.cache.get(&relative_path) {
            log::debug!("{relative_path}: cached commit lookup");
            cached
        } else {
            let outcome = self.lookup(&relative_path);
            self.cache.insert(relative_path, outcome);
            log::debug!("{} paths in commit cache", self.cache.len());
            outcome
        };

        Ok(outcome.map(|instant| TimestampRecord::new(instant, TimestampSource::RemoteCommit)))
    }
}
