//! Timestamp resolution for Markdown documents
//!
//! A [`TimestampResolver`] owns an ordered list of strategies and returns the
//! first one that produces a result:
//! 1. [`RemoteStrategy`]: last commit touching the file, from the GitHub API
//! 2. [`LocalStrategy`]: file birth time, or the closest platform analogue
//!
//! The remote strategy never fails; it answers `None` and the local strategy
//! takes over. Every resolver carries its own cache and warning ledger, so a
//! fresh resolver per run gives fresh per-run state.

mod cache;
mod github;
mod local;
mod remote;

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Local, TimeZone, Utc};

pub use cache::{ResolutionCache, WarningKind, WarningLedger};
pub use github::{CommitLookup, CommitSource, GitHubCommits};
pub use local::LocalStrategy;
pub use remote::RemoteStrategy;

use crate::error::{Result, fs::timestamp_unavailable};

/// Format used for every `date:` value written to frontmatter
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Where a timestamp came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    RemoteCommit,
    LocalCtime,
}

impl fmt::Display for TimestampSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampSource::RemoteCommit => f.write_str("remote-commit"),
            TimestampSource::LocalCtime => f.write_str("local-ctime"),
        }
    }
}

/// A resolved instant and its source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampRecord {
    pub instant: DateTime<Utc>,
    pub source: TimestampSource,
}

impl TimestampRecord {
    pub fn new(instant: DateTime<Utc>, source: TimestampSource) -> Self {
        Self { instant, source }
    }

    /// Render in `tz` using [`DISPLAY_FORMAT`]
    pub fn render_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.instant
            .with_timezone(tz)
            .format(DISPLAY_FORMAT)
            .to_string()
    }

    /// Render in the local time zone
    pub fn render(&self) -> String {
        self.render_in(&Local)
    }
}

/// One step of the resolution chain
pub trait TimestampStrategy {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Produce a timestamp for `path`, or `None` to defer to the next strategy
    fn resolve(&mut self, path: &Path) -> Result<Option<TimestampRecord>>;
}

/// Tries each strategy in order and stops at the first result
pub struct TimestampResolver {
    strategies: Vec<Box<dyn TimestampStrategy>>,
}

impl TimestampResolver {
    pub fn new(strategies: Vec<Box<dyn TimestampStrategy>>) -> Self {
        Self { strategies }
    }

    /// Local metadata only; no network access
    pub fn local_only() -> Self {
        Self::new(vec![Box::new(LocalStrategy)])
    }

    /// Remote commit history first, local metadata as fallback
    pub fn with_remote(remote: RemoteStrategy) -> Self {
        Self::new(vec![Box::new(remote), Box::new(LocalStrategy)])
    }

    /// Resolve the authoritative timestamp for `path`
    pub fn resolve(&mut self, path: &Path) -> Result<TimestampRecord> {
        for strategy in &mut self.strategies {
            if let Some(record) = strategy.resolve(path)? {
                log::debug!(
                    "{}: {} via {} ({})",
                    path.display(),
                    record.render(),
                    strategy.name(),
                    record.source
                );
                return Ok(record);
            }
        }

        Err(timestamp_unavailable(path, "no strategy produced a timestamp"))
    }
}
