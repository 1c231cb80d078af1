// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the Repovoice workspace.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Normalized repository identifier.
///
/// Catalog lookups and favorites keys always use this form: trimmed,
/// lowercased, with runs of whitespace and underscores folded to a single
/// `-` separator. Empty raw input normalizes to an empty key, which no
/// catalog entry ever carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoKey(String);

impl RepoKey {
    /// Normalizes raw slot text into a repository key.
    pub fn normalize(raw: &str) -> Self {
        let key = raw
            .trim()
            .to_lowercase()
            .split(|c: char| c.is_whitespace() || c == '_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        Self(key)
    }

    /// Wraps a string that is already in normalized form.
    ///
    /// Intended for catalog construction and deserialized session bags;
    /// slot text must go through [`RepoKey::normalize`] instead.
    pub fn from_normalized(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for RepoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single catalog entry: the static facts known about one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Normalized key the entry is filed under.
    pub key: RepoKey,
    /// Name spoken back to the user.
    pub display_name: String,
    /// `owner/repo` slug used by the update fetcher.
    pub full_name: String,
}

/// The unit of information flowing from the fetcher into metadata.
///
/// Ephemeral: produced per fetch, consumed immediately by the merger.
/// Carries its originating key so multi-repository results can be
/// redistributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecord {
    pub repo_key: RepoKey,
    pub field: String,
    pub value: String,
}

/// Per-turn repository metadata assembled by the merger.
///
/// Fields are an open set of named values, each optionally present, held
/// in a sorted map so speech rendering is deterministic. Never shared
/// between turns or users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoMetadata {
    pub display_name: String,
    pub fields: BTreeMap<String, String>,
}

impl RepoMetadata {
    /// Creates metadata with no fields present.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            fields: BTreeMap::new(),
        }
    }
}

/// Recognized voice intents.
///
/// Intent names arrive as raw strings from the voice platform; parsing is
/// via `FromStr` and an unrecognized name is handled by the dispatcher's
/// fallback branch, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Intent {
    #[strum(serialize = "LaunchRequest")]
    Launch,
    RepoUpdates,
    GetFavorites,
    AddFavorite,
    RemoveFavorite,
    RemoveAllFavorites,
    FavoriteUpdates,
    #[strum(serialize = "AMAZON.HelpIntent")]
    Help,
    #[strum(serialize = "AMAZON.StopIntent")]
    Stop,
    #[strum(serialize = "AMAZON.CancelIntent")]
    Cancel,
}

/// One inbound turn: a raw intent name plus the optional repo-name slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRequest {
    pub intent: String,
    #[serde(default)]
    pub slot: Option<String>,
}

impl TurnRequest {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            slot: None,
        }
    }

    pub fn with_slot(intent: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            slot: Some(slot.into()),
        }
    }
}

/// One outbound turn: the speech to render, emitted exactly once.
///
/// `should_end_session` is always true in this skill; it is carried
/// explicitly because the platform contract requires it on every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResponse {
    pub speech: String,
    pub should_end_session: bool,
}

impl TurnResponse {
    /// Builds the single terminal response for a turn.
    pub fn speak(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            should_end_session: true,
        }
    }
}
