// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HashMap-backed session store for tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use repovoice_core::RepoVoiceError;
use repovoice_favorites::FavoritesSet;
use repovoice_store::SessionStore;
use tokio::sync::Mutex;

/// In-memory session store. Nothing survives the process; that is the
/// point.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<Mutex<HashMap<String, FavoritesSet>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load_favorites(&self, user_id: &str) -> Result<FavoritesSet, RepoVoiceError> {
        Ok(self
            .sessions
            .lock()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save_favorites(
        &self,
        user_id: &str,
        favorites: &FavoritesSet,
    ) -> Result<(), RepoVoiceError> {
        self.sessions
            .lock()
            .await
            .insert(user_id.to_string(), favorites.clone());
        Ok(())
    }
}
