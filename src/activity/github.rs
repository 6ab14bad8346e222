//! GitHub REST client for the site repository's commit history

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::ACCEPT;
use serde_json::Value;
use url::Url;

use crate::api::parsing::v_str;
use crate::core::models::CommitSummary;
use crate::errors::BackendError;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const REPOSITORY: &str = "azaynul10/disastertech-dev";
const CLIENT_USER_AGENT: &str = concat!("site-backend/", env!("CARGO_PKG_VERSION"));

#[async_trait]
pub trait CommitSource: Send + Sync {
    /// Newest-first commits, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a reply
    /// that is not a list of commit objects.
    async fn recent_commits(&self, limit: usize) -> Result<Vec<CommitSummary>, BackendError>;
}

pub struct GithubCommitSource {
    http: HttpClient,
    commits_url: Url,
}

impl GithubCommitSource {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, BackendError> {
        Self::with_api_base(GITHUB_API_BASE)
    }

    /// Same repository, different API host (GitHub Enterprise, test servers).
    ///
    /// # Errors
    ///
    /// Returns an error if `api_base` is not a valid URL or the HTTP client cannot be built.
    pub fn with_api_base(api_base: &str) -> Result<Self, BackendError> {
        let commits_url = commits_url(api_base, REPOSITORY)?;
        let http = HttpClient::builder()
            .user_agent(CLIENT_USER_AGENT)
            .build()?;
        Ok(Self { http, commits_url })
    }

    #[must_use]
    pub fn commits_url(&self) -> &Url {
        &self.commits_url
    }
}

fn commits_url(api_base: &str, repository: &str) -> Result<Url, BackendError> {
    let mut url = Url::parse(api_base)
        .map_err(|e| BackendError::ParseError(format!("GitHub API base {api_base}: {e}")))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| BackendError::ParseError(format!("GitHub API base {api_base}")))?;
        segments.pop_if_empty().push("repos");
        for part in repository.split('/') {
            segments.push(part);
        }
        segments.push("commits");
    }
    Ok(url)
}

/// Extract `commit.message` from the first `limit` entries of a commits listing.
///
/// # Errors
///
/// Returns `ParseError` if the reply is not an array, or one of the inspected
/// entries lacks a message.
pub fn summarize_commits(listing: &Value, limit: usize) -> Result<Vec<CommitSummary>, BackendError> {
    let entries = listing.as_array().ok_or_else(|| {
        BackendError::ParseError("GitHub commits reply is not a list".to_string())
    })?;

    entries
        .iter()
        .take(limit)
        .enumerate()
        .map(|(idx, entry)| {
            v_str(entry, &["commit", "message"])
                .map(|message| CommitSummary {
                    message: message.to_string(),
                })
                .ok_or_else(|| {
                    BackendError::ParseError(format!("commit {idx} has no commit.message"))
                })
        })
        .collect()
}

#[async_trait]
impl CommitSource for GithubCommitSource {
    async fn recent_commits(&self, limit: usize) -> Result<Vec<CommitSummary>, BackendError> {
        let listing: Value = self
            .http
            .get(self.commits_url.clone())
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| BackendError::ParseError(format!("GitHub commits reply: {e}")))?;

        summarize_commits(&listing, limit)
    }
}
