// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GitHub-backed implementation of [`UpdateFetcher`].
//!
//! Derives the `stars` and `open issues` fields from the repository
//! endpoint and `last release` from the latest-release endpoint. A
//! repository without releases simply lacks that field; it is not an
//! error.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use repovoice_core::{CatalogEntry, RepoVoiceError, UpdateFetcher, UpdateRecord};
use serde::Deserialize;
use tracing::{debug, warn};

/// Field names emitted by this fetcher.
pub const FIELD_STARS: &str = "stars";
pub const FIELD_OPEN_ISSUES: &str = "open issues";
pub const FIELD_LAST_RELEASE: &str = "last release";

/// Update fetcher backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubFetcher {
    client: reqwest::Client,
    api_base: String,
}

impl GitHubFetcher {
    /// Creates a fetcher against the given API base URL.
    ///
    /// GitHub rejects requests without a User-Agent, so one is mandatory.
    /// The HTTP-level timeout here is a transport bound; the dispatcher
    /// applies its own turn-level timeout on top.
    pub fn new(
        api_base: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, RepoVoiceError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| RepoVoiceError::Fetch {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;
        let api_base: String = api_base.into();
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }
}

/// Subset of the repository endpoint payload this fetcher consumes.
#[derive(Debug, Deserialize)]
struct RepoPayload {
    stargazers_count: u64,
    open_issues_count: u64,
}

/// Subset of the latest-release endpoint payload.
#[derive(Debug, Deserialize)]
struct ReleasePayload {
    tag_name: String,
}

#[async_trait]
impl UpdateFetcher for GitHubFetcher {
    async fn fetch_one(&self, entry: &CatalogEntry) -> Result<Vec<UpdateRecord>, RepoVoiceError> {
        let repo_url = format!("{}/repos/{}", self.api_base, entry.full_name);
        let response = self
            .client
            .get(&repo_url)
            .send()
            .await
            .map_err(|e| RepoVoiceError::Fetch {
                message: format!("request to {repo_url} failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepoVoiceError::Fetch {
                message: format!(
                    "repository endpoint returned {status} for {}",
                    entry.full_name
                ),
                source: None,
            });
        }

        let payload: RepoPayload =
            response.json().await.map_err(|e| RepoVoiceError::Fetch {
                message: format!("malformed repository payload for {}: {e}", entry.full_name),
                source: Some(Box::new(e)),
            })?;

        let mut records = vec![
            UpdateRecord {
                repo_key: entry.key.clone(),
                field: FIELD_STARS.to_string(),
                value: payload.stargazers_count.to_string(),
            },
            UpdateRecord {
                repo_key: entry.key.clone(),
                field: FIELD_OPEN_ISSUES.to_string(),
                value: payload.open_issues_count.to_string(),
            },
        ];

        if let Some(tag) = self.latest_release_tag(entry).await {
            records.push(UpdateRecord {
                repo_key: entry.key.clone(),
                field: FIELD_LAST_RELEASE.to_string(),
                value: tag,
            });
        }

        debug!(repo = %entry.key, records = records.len(), "fetched repository updates");
        Ok(records)
    }

    async fn fetch_many(
        &self,
        entries: &[CatalogEntry],
    ) -> Result<Vec<UpdateRecord>, RepoVoiceError> {
        let results = join_all(entries.iter().map(|entry| self.fetch_one(entry))).await;

        let mut records = Vec::new();
        let mut failures = 0usize;
        for (entry, result) in entries.iter().zip(results) {
            match result {
                Ok(mut fetched) => records.append(&mut fetched),
                Err(e) => {
                    failures += 1;
                    warn!(repo = %entry.key, error = %e, "favorite update fetch failed");
                }
            }
        }

        if !entries.is_empty() && failures == entries.len() {
            return Err(RepoVoiceError::Fetch {
                message: format!("all {} repositories failed to fetch", entries.len()),
                source: None,
            });
        }
        Ok(records)
    }
}

impl GitHubFetcher {
    /// Returns the latest release tag, or None when the repository has no
    /// releases or the release lookup fails. A failed release lookup only
    /// costs that one field, never the turn.
    async fn latest_release_tag(&self, entry: &CatalogEntry) -> Option<String> {
        let url = format!("{}/repos/{}/releases/latest", self.api_base, entry.full_name);
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(repo = %entry.key, error = %e, "release lookup failed");
                return None;
            }
        };

        match response.status() {
            status if status.is_success() => match response.json::<ReleasePayload>().await {
                Ok(payload) => Some(payload.tag_name),
                Err(e) => {
                    warn!(repo = %entry.key, error = %e, "malformed release payload");
                    None
                }
            },
            reqwest::StatusCode::NOT_FOUND => {
                debug!(repo = %entry.key, "repository has no releases");
                None
            }
            status => {
                warn!(repo = %entry.key, %status, "release endpoint error");
                None
            }
        }
    }
}
