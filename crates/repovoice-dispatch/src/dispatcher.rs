// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turn execution: runs a plan to completion, fetching where needed.
//!
//! Every fetch is bounded by the configured timeout, so a hung update
//! source still terminates the turn — with the generic failure speech,
//! never silence.

use std::sync::Arc;
use std::time::Duration;

use repovoice_catalog::Catalog;
use repovoice_core::{
    CatalogEntry, RepoVoiceError, TurnRequest, TurnResponse, UpdateFetcher, UpdateRecord,
};
use repovoice_favorites::FavoritesSet;
use repovoice_updates::merger;
use tracing::{debug, warn};

use crate::plan::{plan, Plan};
use crate::speech;

/// The result of one turn: the single response, plus whether the caller
/// must write favorites back to the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub response: TurnResponse,
    pub favorites_changed: bool,
}

/// Executes one turn at a time against a catalog and an update source.
///
/// Stateless between turns apart from the injected favorites; safe to
/// share across users because nothing fetched during a turn outlives it.
pub struct Dispatcher {
    catalog: Catalog,
    fetcher: Arc<dyn UpdateFetcher>,
    fetch_timeout: Duration,
}

impl Dispatcher {
    pub fn new(catalog: Catalog, fetcher: Arc<dyn UpdateFetcher>, fetch_timeout: Duration) -> Self {
        Self {
            catalog,
            fetcher,
            fetch_timeout,
        }
    }

    /// Handles one turn to completion.
    ///
    /// Always returns exactly one response with `should_end_session` set;
    /// fetch rejection and timeout both resolve to the generic failure
    /// speech.
    pub async fn handle_turn(
        &self,
        request: &TurnRequest,
        favorites: &mut FavoritesSet,
    ) -> TurnOutcome {
        let outcome = plan(&self.catalog, request, favorites);
        debug!(intent = %request.intent, changed = outcome.favorites_changed, "turn planned");

        let speech = match outcome.plan {
            Plan::Speak(text) => text,
            Plan::Fetch { lead_in, entries } => match self.fetch(&entries).await {
                Ok(records) => {
                    let mut text = lead_in;
                    for entry in &entries {
                        text.push_str(&merger::render_speech(&merger::merge_for(entry, &records)));
                    }
                    text
                }
                Err(e) => {
                    warn!(intent = %request.intent, error = %e, "fetch failed, speaking fallback");
                    speech::FETCH_FAILURE.to_string()
                }
            },
        };

        TurnOutcome {
            response: TurnResponse::speak(speech),
            favorites_changed: outcome.favorites_changed,
        }
    }

    async fn fetch(&self, entries: &[CatalogEntry]) -> Result<Vec<UpdateRecord>, RepoVoiceError> {
        let fut = async {
            match entries {
                [single] => self.fetcher.fetch_one(single).await,
                many => self.fetcher.fetch_many(many).await,
            }
        };
        match tokio::time::timeout(self.fetch_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(RepoVoiceError::Timeout {
                duration: self.fetch_timeout,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use repovoice_core::RepoKey;
    use repovoice_test_utils::{MockFetch, MockFetcher};

    use super::*;

    fn key(s: &str) -> RepoKey {
        RepoKey::from_normalized(s)
    }

    fn record(k: &str, field: &str, value: &str) -> UpdateRecord {
        UpdateRecord {
            repo_key: key(k),
            field: field.into(),
            value: value.into(),
        }
    }

    fn dispatcher(fetcher: MockFetcher) -> (Dispatcher, Arc<MockFetcher>) {
        let fetcher = Arc::new(fetcher);
        let dispatcher = Dispatcher::new(
            Catalog::builtin(),
            fetcher.clone(),
            Duration::from_secs(8),
        );
        (dispatcher, fetcher)
    }

    #[tokio::test]
    async fn get_favorites_on_empty_set_speaks_guidance_and_ends_session() {
        let (dispatcher, _) = dispatcher(MockFetcher::new());
        let mut favorites = FavoritesSet::new();

        let outcome = dispatcher
            .handle_turn(&TurnRequest::new("GetFavorites"), &mut favorites)
            .await;

        assert_eq!(
            outcome.response.speech,
            "You currently have no favorites. Tell repo voice add favorite to add one."
        );
        assert!(outcome.response.should_end_session);
        assert!(!outcome.favorites_changed);
    }

    #[tokio::test]
    async fn add_favorite_node_mutates_and_confirms() {
        let (dispatcher, _) = dispatcher(MockFetcher::new());
        let mut favorites = FavoritesSet::new();

        let outcome = dispatcher
            .handle_turn(&TurnRequest::with_slot("AddFavorite", "Node"), &mut favorites)
            .await;

        assert_eq!(outcome.response.speech, "Favorite has been added.");
        assert!(outcome.favorites_changed);
        assert_eq!(favorites.list(), &[key("node")]);
    }

    #[tokio::test]
    async fn remove_favorite_node_empties_the_set() {
        let (dispatcher, _) = dispatcher(MockFetcher::new());
        let mut favorites: FavoritesSet = [key("node")].into_iter().collect();

        let outcome = dispatcher
            .handle_turn(
                &TurnRequest::with_slot("RemoveFavorite", "node"),
                &mut favorites,
            )
            .await;

        assert_eq!(outcome.response.speech, "Favorite has been removed.");
        assert!(outcome.favorites_changed);
        assert!(favorites.is_empty());
    }

    #[tokio::test]
    async fn unknown_repo_updates_performs_no_fetch() {
        let (dispatcher, fetcher) = dispatcher(MockFetcher::new());
        let mut favorites = FavoritesSet::new();

        let outcome = dispatcher
            .handle_turn(
                &TurnRequest::with_slot("RepoUpdates", "unknownthing"),
                &mut favorites,
            )
            .await;

        assert_eq!(outcome.response.speech, "Sorry, I haven't heard of that repo.");
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn repo_updates_renders_fetched_fields() {
        let fetcher = MockFetcher::with_records(vec![
            record("node", "stars", "112000"),
            record("node", "last release", "v22.12.0"),
        ]);
        let (dispatcher, _) = dispatcher(fetcher);
        let mut favorites = FavoritesSet::new();

        let outcome = dispatcher
            .handle_turn(&TurnRequest::with_slot("RepoUpdates", "node"), &mut favorites)
            .await;

        assert_eq!(
            outcome.response.speech,
            "Here are the updates on node. For Node, last release is v22.12.0, stars is 112000. "
        );
    }

    #[tokio::test]
    async fn favorite_updates_renders_each_favorite_once_in_insertion_order() {
        // Records arrive interleaved and out of favorites order on purpose.
        let fetcher = MockFetcher::with_records(vec![
            record("react", "stars", "230000"),
            record("node", "stars", "112000"),
            record("react", "open issues", "700"),
        ]);
        let (dispatcher, _) = dispatcher(fetcher);
        let mut favorites: FavoritesSet = [key("node"), key("react")].into_iter().collect();

        let outcome = dispatcher
            .handle_turn(&TurnRequest::new("FavoriteUpdates"), &mut favorites)
            .await;

        let speech = &outcome.response.speech;
        assert!(speech.starts_with("Here are the updates on your favorite repos. "));
        assert_eq!(speech.matches("For Node,").count(), 1);
        assert_eq!(speech.matches("For React,").count(), 1);
        // Node was favorited first, so it renders first.
        assert!(speech.find("For Node,").unwrap() < speech.find("For React,").unwrap());
    }

    #[tokio::test]
    async fn favorite_updates_speech_independent_of_record_arrival_order() {
        let forward = MockFetcher::with_records(vec![
            record("node", "stars", "112000"),
            record("react", "stars", "230000"),
        ]);
        let reversed = MockFetcher::with_records(vec![
            record("react", "stars", "230000"),
            record("node", "stars", "112000"),
        ]);

        let mut speeches = Vec::new();
        for fetcher in [forward, reversed] {
            let (dispatcher, _) = dispatcher(fetcher);
            let mut favorites: FavoritesSet = [key("node"), key("react")].into_iter().collect();
            let outcome = dispatcher
                .handle_turn(&TurnRequest::new("FavoriteUpdates"), &mut favorites)
                .await;
            speeches.push(outcome.response.speech);
        }
        assert_eq!(speeches[0], speeches[1]);
    }

    #[tokio::test]
    async fn fetch_rejection_speaks_generic_failure_and_completes_turn() {
        let (dispatcher, _) = dispatcher(MockFetcher::failing("simulated timeout"));
        let mut favorites = FavoritesSet::new();

        let outcome = dispatcher
            .handle_turn(&TurnRequest::with_slot("RepoUpdates", "node"), &mut favorites)
            .await;

        assert_eq!(
            outcome.response.speech,
            "Sorry, I couldn't get updates right now. Please try again later."
        );
        assert!(outcome.response.should_end_session);
    }

    #[tokio::test(start_paused = true)]
    async fn hung_fetch_is_bounded_by_the_timeout() {
        let fetcher = Arc::new(MockFetcher::hanging());
        let dispatcher = Dispatcher::new(
            Catalog::builtin(),
            fetcher.clone(),
            Duration::from_secs(8),
        );
        let mut favorites = FavoritesSet::new();

        // Paused time: the 8s timeout elapses instantly instead of hanging
        // the test.
        let outcome = dispatcher
            .handle_turn(&TurnRequest::with_slot("RepoUpdates", "node"), &mut favorites)
            .await;

        assert_eq!(
            outcome.response.speech,
            "Sorry, I couldn't get updates right now. Please try again later."
        );
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn scripted_failure_queue_applies_per_call() {
        let fetcher = MockFetcher::scripted(vec![
            MockFetch::Failure("first call fails".into()),
            MockFetch::Records(vec![record("node", "stars", "112000")]),
        ]);
        let (dispatcher, _) = dispatcher(fetcher);
        let mut favorites = FavoritesSet::new();

        let failed = dispatcher
            .handle_turn(&TurnRequest::with_slot("RepoUpdates", "node"), &mut favorites)
            .await;
        assert!(failed.response.speech.starts_with("Sorry, I couldn't"));

        let ok = dispatcher
            .handle_turn(&TurnRequest::with_slot("RepoUpdates", "node"), &mut favorites)
            .await;
        assert!(ok.response.speech.contains("stars is 112000"));
    }
}
