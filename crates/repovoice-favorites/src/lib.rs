// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-user favorites set.
//!
//! A [`FavoritesSet`] is semantically a set of repository keys, kept in
//! insertion order so that FavoriteUpdates speech iterates favorites in a
//! reproducible order. All operations are synchronous, pure transformations;
//! persistence is the session store's responsibility.
//!
//! The invariants callers rely on are enforced here, not at call sites:
//! adding a present key and removing an absent key are both no-op successes.

use std::collections::BTreeMap;

use repovoice_core::RepoKey;
use serde::{Deserialize, Serialize};

/// Insertion-ordered set of favorited repository keys, owned by one user's
/// session.
///
/// Serializes as a sequence of keys. Deserialization also accepts the
/// legacy `{key: true}` attribute-bag shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FavoritesWire", into = "Vec<RepoKey>")]
pub struct FavoritesSet {
    keys: Vec<RepoKey>,
}

impl FavoritesSet {
    /// Creates an empty set, the state of a user who has never favorited.
    pub fn new() -> Self {
        Self::default()
    }

    /// The favorited keys in insertion order; empty slice for the empty set.
    pub fn list(&self) -> &[RepoKey] {
        &self.keys
    }

    /// Adds a key. Idempotent: returns false (and leaves order untouched)
    /// if the key was already present.
    pub fn add(&mut self, key: RepoKey) -> bool {
        if self.keys.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Removes a key. Removing a non-member is a no-op success: returns
    /// false, never an error.
    pub fn remove(&mut self, key: &RepoKey) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.keys.len() != before
    }

    /// Empties the set unconditionally.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, key: &RepoKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<RepoKey> for FavoritesSet {
    fn from_iter<T: IntoIterator<Item = RepoKey>>(iter: T) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.add(key);
        }
        set
    }
}

impl From<FavoritesSet> for Vec<RepoKey> {
    fn from(set: FavoritesSet) -> Self {
        set.keys
    }
}

/// Wire shapes accepted when deserializing a favorites attribute.
#[derive(Deserialize)]
#[serde(untagged)]
enum FavoritesWire {
    Keys(Vec<RepoKey>),
    /// Legacy bag shape: `{"node": true}`. Only true-valued keys are
    /// members; ordering follows the map's sorted key order.
    Flags(BTreeMap<String, bool>),
}

impl From<FavoritesWire> for FavoritesSet {
    fn from(wire: FavoritesWire) -> Self {
        match wire {
            FavoritesWire::Keys(keys) => keys.into_iter().collect(),
            FavoritesWire::Flags(flags) => flags
                .into_iter()
                .filter(|(_, present)| *present)
                .map(|(key, _)| RepoKey::from_normalized(key))
                .collect(),
        }
    }
}
