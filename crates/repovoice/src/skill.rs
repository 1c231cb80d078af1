// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wiring of the dispatcher to the real collaborators, plus the turn loop
//! glue the platform runtime would otherwise provide.
//!
//! `run_turn` never fails: session-store trouble is logged and recovered
//! so every turn still speaks exactly once.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use repovoice_catalog::Catalog;
use repovoice_config::RepovoiceConfig;
use repovoice_core::{RepoVoiceError, TurnRequest, TurnResponse};
use repovoice_dispatch::Dispatcher;
use repovoice_favorites::FavoritesSet;
use repovoice_store::{FileSessionStore, SessionStore};
use repovoice_updates::GitHubFetcher;
use tracing::warn;

/// A fully wired skill: dispatcher, update source, and session store.
pub struct Skill {
    dispatcher: Dispatcher,
    store: Arc<dyn SessionStore>,
}

impl Skill {
    /// Builds the skill from configuration, with the GitHub fetcher and
    /// the JSON-file session store.
    pub fn from_config(config: &RepovoiceConfig) -> Result<Self, RepoVoiceError> {
        let catalog = match &config.catalog.path {
            Some(path) => Catalog::load(Path::new(path))?,
            None => Catalog::builtin(),
        };

        let timeout = Duration::from_secs(config.fetch.timeout_secs);
        let fetcher = GitHubFetcher::new(&config.fetch.api_base, &config.fetch.user_agent, timeout)?;
        let store = FileSessionStore::new(&config.storage.session_path);

        Ok(Self::new(
            Dispatcher::new(catalog, Arc::new(fetcher), timeout),
            Arc::new(store),
        ))
    }

    /// Builds the skill from explicit parts (tests use mock adapters).
    pub fn new(dispatcher: Dispatcher, store: Arc<dyn SessionStore>) -> Self {
        Self { dispatcher, store }
    }

    /// Runs one turn for one user: load favorites, dispatch, persist if
    /// mutated.
    ///
    /// Store failures never swallow the turn. An unreadable store starts
    /// the turn from an empty set; a failed write keeps the spoken
    /// confirmation (the next turn sees the old favorites) — both are
    /// logged for operators.
    pub async fn run_turn(&self, user_id: &str, request: &TurnRequest) -> TurnResponse {
        let mut favorites = match self.store.load_favorites(user_id).await {
            Ok(favorites) => favorites,
            Err(e) => {
                warn!(user = user_id, error = %e, "cannot load favorites, starting empty");
                FavoritesSet::new()
            }
        };

        let outcome = self.dispatcher.handle_turn(request, &mut favorites).await;

        if outcome.favorites_changed {
            if let Err(e) = self.store.save_favorites(user_id, &favorites).await {
                warn!(user = user_id, error = %e, "favorites not persisted");
            }
        }

        outcome.response
    }
}
