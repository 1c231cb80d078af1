// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session attribute persistence.
//!
//! The dispatcher only produces a new favorites value; writing it back,
//! keyed by user identity, is this crate's job. [`FileSessionStore`] keeps
//! one JSON document per store path mapping user id to attribute bag,
//! which matches the original skill's key-value session table.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use repovoice_core::RepoVoiceError;
use repovoice_favorites::FavoritesSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Persists per-user session attributes across invocations.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads a user's favorites. A user never seen before loads as the
    /// empty set, not an error.
    async fn load_favorites(&self, user_id: &str) -> Result<FavoritesSet, RepoVoiceError>;

    /// Writes a user's favorites back. Called whenever a turn mutated them.
    async fn save_favorites(
        &self,
        user_id: &str,
        favorites: &FavoritesSet,
    ) -> Result<(), RepoVoiceError>;
}

/// Attribute bag persisted per user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionAttributes {
    #[serde(default)]
    favorites: FavoritesSet,
}

/// JSON-file session store: the whole document is a map of user id to
/// attribute bag, rewritten atomically on save.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, SessionAttributes>, RepoVoiceError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(RepoVoiceError::Store {
                    message: format!("cannot read session store {}: {e}", self.path.display()),
                    source: Some(Box::new(e)),
                });
            }
        };
        serde_json::from_slice(&bytes).map_err(|e| RepoVoiceError::Store {
            message: format!("malformed session store {}: {e}", self.path.display()),
            source: Some(Box::new(e)),
        })
    }

    async fn write_all(
        &self,
        sessions: &BTreeMap<String, SessionAttributes>,
    ) -> Result<(), RepoVoiceError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| RepoVoiceError::Store {
                    message: format!("cannot create {}: {e}", parent.display()),
                    source: Some(Box::new(e)),
                })?;
        }

        let bytes = serde_json::to_vec_pretty(sessions).map_err(|e| RepoVoiceError::Store {
            message: format!("cannot serialize session store: {e}"),
            source: Some(Box::new(e)),
        })?;

        // Write-then-rename so a crash mid-write never corrupts the store.
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| RepoVoiceError::Store {
                message: format!("cannot write {}: {e}", tmp.display()),
                source: Some(Box::new(e)),
            })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| RepoVoiceError::Store {
                message: format!("cannot replace {}: {e}", self.path.display()),
                source: Some(Box::new(e)),
            })
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load_favorites(&self, user_id: &str) -> Result<FavoritesSet, RepoVoiceError> {
        let sessions = self.read_all().await?;
        Ok(sessions
            .get(user_id)
            .map(|attrs| attrs.favorites.clone())
            .unwrap_or_default())
    }

    async fn save_favorites(
        &self,
        user_id: &str,
        favorites: &FavoritesSet,
    ) -> Result<(), RepoVoiceError> {
        let mut sessions = self.read_all().await?;
        sessions
            .entry(user_id.to_string())
            .or_default()
            .favorites = favorites.clone();
        self.write_all(&sessions).await?;
        debug!(user = user_id, favorites = favorites.len(), "session saved");
        Ok(())
    }
}
