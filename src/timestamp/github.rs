//! GitHub commit history client
//!
//! Asks `GET /repos/{owner}/{repo}/commits` for the newest commit touching one
//! path and classifies the answer. Every failure mode is folded into a
//! [`CommitLookup`] variant; nothing here returns an error.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::config::RemoteConfig;
use crate::error::{Result, remote::client_failed};

/// Media type requested from the API
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Outcome of one commit history lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitLookup {
    /// Author (or committer) date of the newest commit
    Found(DateTime<Utc>),
    /// The path has no commits on the branch
    Empty,
    /// HTTP 403 or 429
    RateLimited,
    /// HTTP 404
    NotFound,
    /// Transport error, timeout, other status or unreadable body
    Failed(String),
}

/// Source of commit dates, keyed by repository-relative path
pub trait CommitSource {
    fn latest_commit(&self, relative_path: &str) -> CommitLookup;
}

/// [`CommitSource`] backed by the GitHub REST API
pub struct GitHubCommits {
    client: Client,
    config: RemoteConfig,
}

impl GitHubCommits {
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("docdate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(client_failed)?;
        Ok(Self { client, config })
    }
}

impl CommitSource for GitHubCommits {
    fn latest_commit(&self, relative_path: &str) -> CommitLookup {
        let url = self.config.commits_url();
        log::debug!(
            "GET {url}?path={relative_path}&sha={}",
            self.config.branch
        );

        let mut request = self
            .client
            .get(&url)
            .query(&[
                ("path", relative_path),
                ("sha", self.config.branch.as_str()),
                ("per_page", "1"),
                ("page", "1"),
            ])
            .header(ACCEPT, GITHUB_MEDIA_TYPE);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = match request.send() {
            Ok(response) => response,
            Err(e) => return CommitLookup::Failed(e.to_string()),
        };

        match response.status() {
            StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => CommitLookup::RateLimited,
            StatusCode::NOT_FOUND => CommitLookup::NotFound,
            status if !status.is_success() => CommitLookup::Failed(format!("HTTP {status}")),
            _ => match response.text() {
                Ok(body) => parse_commit_payload(&body),
                Err(e) => CommitLookup::Failed(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct CommitEntry {
    #[serde(default)]
    commit: Option<CommitDetail>,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    #[serde(default)]
    author: Option<Signature>,
    #[serde(default)]
    committer: Option<Signature>,
}

#[derive(Debug, Deserialize)]
struct Signature {
    #[serde(default)]
    date: Option<String>,
}

fn signature_date(signature: Option<&Signature>) -> Option<&str> {
    signature
        .and_then(|s| s.date.as_deref())
        .filter(|d| !d.is_empty())
}

/// Classify a 2xx response body from the commits endpoint
pub fn parse_commit_payload(body: &str) -> CommitLookup {
    let entries: Vec<CommitEntry> = match serde_json::from_str(body) {
        Ok(entries) => entries,
        Err(e) => return CommitLookup::Failed(format!("malformed response: {e}")),
    };

    let Some(first) = entries.first() else {
        return CommitLookup::Empty;
    };

    let date = first.commit.as_ref().and_then(|detail| {
        signature_date(detail.author.as_ref()).or_else(|| signature_date(detail.committer.as_ref()))
    });
    let Some(date) = date else {
        return CommitLookup::Failed("commit has no date".to_string());
    };

    match DateTime::parse_from_rfc3339(date) {
        Ok(parsed) => CommitLookup::Found(parsed.with_timezone(&Utc)),
        Err(e) => CommitLookup::Failed(format!("unparsable date '{date}': {e}")),
    }
}
