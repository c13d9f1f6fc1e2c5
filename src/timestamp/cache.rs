//! Per-run memoization of remote lookups and warning deduplication

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

/// Remote outcomes keyed by repository-relative path.
///
/// `Some(None)` from [`get`](Self::get) is a cached "no remote result".
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: HashMap<String, Option<DateTime<Utc>>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, relative_path: &str) -> Option<Option<DateTime<Utc>>> {
        self.entries.get(relative_path).copied()
    }

    /// Record an outcome; the first outcome for a path is kept
    pub fn insert(&mut self, relative_path: String, outcome: Option<DateTime<Utc>>) {
        self.entries.entry(relative_path).or_insert(outcome);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Warning classes raised by the remote lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    RateLimited,
    NotFound,
}

impl WarningKind {
    pub fn key(self) -> &'static str {
        match self {
            WarningKind::RateLimited => "rate-limited",
            WarningKind::NotFound => "not-found",
        }
    }

    /// Text shown to the user, if this class is shown at all
    pub fn message(self) -> Option<&'static str> {
        match self {
            WarningKind::RateLimited => {
                Some("GitHub API rate limit reached; falling back to local timestamps.")
            }
            WarningKind::NotFound => None,
        }
    }
}

/// Warning classes already seen during this run
#[derive(Debug, Default)]
pub struct WarningLedger {
    seen: HashSet<WarningKind>,
    emitted: Vec<WarningKind>,
}

impl WarningLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note an occurrence of `kind`.
    ///
    /// Returns the message to print on the first occurrence of a class that
    /// has one; `None` otherwise.
    pub fn record(&mut self, kind: WarningKind) -> Option<&'static str> {
        if !self.seen.insert(kind) {
            return None;
        }
        let message = kind.message()?;
        self.emitted.push(kind);
        Some(message)
    }

    #[allow(dead_code)] // used in tests
    pub fn has_seen(&self, kind: WarningKind) -> bool {
        self.seen.contains(&kind)
    }

    /// Classes whose message was handed out, in order
    #[allow(dead_code)] // used in tests
    pub fn emitted(&self) -> &[WarningKind] {
        &self.emitted
    }
}
