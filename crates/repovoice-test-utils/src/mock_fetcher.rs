// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted update fetcher for deterministic dispatcher tests.
//!
//! `MockFetcher` implements `UpdateFetcher` with a FIFO script of
//! pre-configured outcomes, including injected failures and a hang mode
//! for exercising the dispatcher's turn-level timeout.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use repovoice_core::{CatalogEntry, RepoVoiceError, UpdateFetcher, UpdateRecord};
use tokio::sync::Mutex;

/// One scripted fetch outcome.
#[derive(Debug, Clone)]
pub enum MockFetch {
    /// Resolve with these records.
    Records(Vec<UpdateRecord>),
    /// Reject with a fetch error carrying this message.
    Failure(String),
    /// Never resolve. The caller's timeout must end the turn.
    Hang,
}

/// An update fetcher that replays a scripted queue of outcomes.
///
/// Outcomes are popped front-first; an empty queue resolves with no
/// records. The call counter lets tests assert that no fetch happened at
/// all (unknown-repo turns must short-circuit before fetching).
pub struct MockFetcher {
    script: Arc<Mutex<VecDeque<MockFetch>>>,
    calls: AtomicUsize,
}

impl MockFetcher {
    /// Creates a fetcher with an empty script.
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            calls: AtomicUsize::new(0),
        }
    }

    /// Creates a fetcher pre-loaded with the given outcomes.
    pub fn scripted(outcomes: Vec<MockFetch>) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::from(outcomes))),
            calls: AtomicUsize::new(0),
        }
    }

    /// Shorthand for a fetcher whose next fetch resolves with `records`.
    pub fn with_records(records: Vec<UpdateRecord>) -> Self {
        Self::scripted(vec![MockFetch::Records(records)])
    }

    /// Shorthand for a fetcher whose next fetch rejects.
    pub fn failing(message: &str) -> Self {
        Self::scripted(vec![MockFetch::Failure(message.to_string())])
    }

    /// Shorthand for a fetcher that never resolves.
    pub fn hanging() -> Self {
        Self::scripted(vec![MockFetch::Hang])
    }

    /// Number of fetch calls made so far (fetch_one and fetch_many both
    /// count).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn next(&self) -> Result<Vec<UpdateRecord>, RepoVoiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self
            .script
            .lock()
            .await
            .pop_front()
            .unwrap_or(MockFetch::Records(Vec::new()));
        match outcome {
            MockFetch::Records(records) => Ok(records),
            MockFetch::Failure(message) => Err(RepoVoiceError::Fetch {
                message,
                source: None,
            }),
            MockFetch::Hang => futures::future::pending().await,
        }
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpdateFetcher for MockFetcher {
    async fn fetch_one(&self, _entry: &CatalogEntry) -> Result<Vec<UpdateRecord>, RepoVoiceError> {
        self.next().await
    }

    async fn fetch_many(
        &self,
        _entries: &[CatalogEntry],
    ) -> Result<Vec<UpdateRecord>, RepoVoiceError> {
        self.next().await
    }
}
