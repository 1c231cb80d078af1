// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The skill's spoken strings.
//!
//! Kept in one place so tests and handlers never drift apart. Strings that
//! interpolate a repository use the helper functions below.

pub const WELCOME: &str =
    "Welcome to Repo Voice. Say give me updates on node or update me on my favorites.";

pub const UNKNOWN_REPO: &str = "Sorry, I haven't heard of that repo.";

pub const NO_FAVORITES: &str = "You currently have no favorites.";

/// Empty-favorites message for GetFavorites, with the add hint.
pub const NO_FAVORITES_ADD_HINT: &str =
    "You currently have no favorites. Tell repo voice add favorite to add one.";

/// Empty-favorites message for FavoriteUpdates.
pub const NO_FAVORITES_ADD_ONE: &str =
    "You currently have no favorites. Tell repo voice to add a favorite.";

pub const FAVORITE_ADDED: &str = "Favorite has been added.";

pub const FAVORITE_REMOVED: &str = "Favorite has been removed.";

pub const ALL_FAVORITES_REMOVED: &str = "All favorites have been removed.";

pub const FAVORITES_LEAD_IN: &str = "Here are the updates on your favorite repos. ";

pub const HELP: &str = "Repo Voice lets you get updates on the GitHub repositories of your \
    choosing. Say ask Repo Voice for updates on my favorites. You can easily add and remove \
    favorites. Say tell Repo Voice add favorite node. You can also get updates for specific \
    repos. Say ask Repo Voice for updates on node.";

pub const BYE: &str = "Bye";

pub const FALLBACK: &str = "Sorry, I didn't get that.";

/// Spoken whenever a fetch rejects or times out. The raw error goes to the
/// logs, never to the user.
pub const FETCH_FAILURE: &str = "Sorry, I couldn't get updates right now. Please try again later.";

/// Lead-in for a single repository's updates.
pub fn repo_updates_lead_in(key: &repovoice_core::RepoKey) -> String {
    format!("Here are the updates on {key}. ")
}

/// Spoken list of favorite keys.
pub fn favorites_list(keys: &[repovoice_core::RepoKey]) -> String {
    let joined = keys
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Here are your favorites: {joined}.")
}
