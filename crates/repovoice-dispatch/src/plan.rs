// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The pure planning phase of a turn.
//!
//! `plan` resolves the raw intent name, validates the slot against the
//! catalog, and applies every favorites mutation synchronously. It returns
//! either finished speech or a pending fetch; it never touches the
//! network. All precondition ordering lives here — for RemoveFavorite the
//! empty-set check runs before slot resolution.

use std::str::FromStr;

use repovoice_catalog::Catalog;
use repovoice_core::{CatalogEntry, Intent, TurnRequest};
use repovoice_favorites::FavoritesSet;
use tracing::{debug, info};

use crate::speech;

/// What the turn still needs after planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// The turn is finished; speak this.
    Speak(String),
    /// Speak `lead_in` followed by per-repository summaries once the
    /// entries have been fetched. Entries are in the order summaries must
    /// be rendered.
    Fetch {
        lead_in: String,
        entries: Vec<CatalogEntry>,
    },
}

/// A plan plus whether favorites were mutated (the caller persists them).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOutcome {
    pub plan: Plan,
    pub favorites_changed: bool,
}

impl PlanOutcome {
    fn speak(text: impl Into<String>) -> Self {
        Self {
            plan: Plan::Speak(text.into()),
            favorites_changed: false,
        }
    }

    fn speak_after_mutation(text: impl Into<String>, changed: bool) -> Self {
        Self {
            plan: Plan::Speak(text.into()),
            favorites_changed: changed,
        }
    }
}

/// Plans one turn.
///
/// Unrecognized intent names fall through to the generic fallback speech;
/// they are never an error.
pub fn plan(catalog: &Catalog, request: &TurnRequest, favorites: &mut FavoritesSet) -> PlanOutcome {
    let Ok(intent) = Intent::from_str(&request.intent) else {
        debug!(intent = %request.intent, "unrecognized intent");
        return PlanOutcome::speak(speech::FALLBACK);
    };

    let slot_entry = request.slot.as_deref().and_then(|raw| catalog.lookup(raw));

    match intent {
        Intent::Launch => PlanOutcome::speak(speech::WELCOME),

        Intent::RepoUpdates => match slot_entry {
            Some(entry) => PlanOutcome {
                plan: Plan::Fetch {
                    lead_in: speech::repo_updates_lead_in(&entry.key),
                    entries: vec![entry.clone()],
                },
                favorites_changed: false,
            },
            None => PlanOutcome::speak(speech::UNKNOWN_REPO),
        },

        Intent::GetFavorites => {
            if favorites.is_empty() {
                PlanOutcome::speak(speech::NO_FAVORITES_ADD_HINT)
            } else {
                PlanOutcome::speak(speech::favorites_list(favorites.list()))
            }
        }

        Intent::AddFavorite => match slot_entry {
            Some(entry) => {
                let changed = favorites.add(entry.key.clone());
                if changed {
                    info!(repo = %entry.key, "favorite added");
                }
                PlanOutcome::speak_after_mutation(speech::FAVORITE_ADDED, changed)
            }
            None => PlanOutcome::speak(speech::UNKNOWN_REPO),
        },

        Intent::RemoveFavorite => {
            // Empty-set messaging takes precedence over unknown-repo.
            if favorites.is_empty() {
                return PlanOutcome::speak(speech::NO_FAVORITES);
            }
            match slot_entry {
                Some(entry) => {
                    let changed = favorites.remove(&entry.key);
                    if changed {
                        info!(repo = %entry.key, "favorite removed");
                    }
                    PlanOutcome::speak_after_mutation(speech::FAVORITE_REMOVED, changed)
                }
                None => PlanOutcome::speak(speech::UNKNOWN_REPO),
            }
        }

        Intent::RemoveAllFavorites => {
            if favorites.is_empty() {
                PlanOutcome::speak(speech::NO_FAVORITES)
            } else {
                favorites.clear();
                info!("all favorites removed");
                PlanOutcome::speak_after_mutation(speech::ALL_FAVORITES_REMOVED, true)
            }
        }

        Intent::FavoriteUpdates => {
            if favorites.is_empty() {
                return PlanOutcome::speak(speech::NO_FAVORITES_ADD_ONE);
            }
            // Favorites keep insertion order; that is the order summaries
            // render in. A key the catalog no longer knows is skipped.
            let entries: Vec<CatalogEntry> = favorites
                .list()
                .iter()
                .filter_map(|key| {
                    let entry = catalog.get(key);
                    if entry.is_none() {
                        debug!(repo = %key, "favorite no longer in catalog, skipping");
                    }
                    entry.cloned()
                })
                .collect();
            PlanOutcome {
                plan: Plan::Fetch {
                    lead_in: speech::FAVORITES_LEAD_IN.to_string(),
                    entries,
                },
                favorites_changed: false,
            }
        }

        Intent::Help => PlanOutcome::speak(speech::HELP),
        Intent::Stop | Intent::Cancel => PlanOutcome::speak(speech::BYE),
    }
}

#[cfg(test)]
mod tests {
    use repovoice_core::RepoKey;

    use super::*;

    fn key(s: &str) -> RepoKey {
        RepoKey::from_normalized(s)
    }

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn launch_speaks_welcome() {
        let mut favorites = FavoritesSet::new();
        let outcome = plan(&catalog(), &TurnRequest::new("LaunchRequest"), &mut favorites);
        assert_eq!(outcome.plan, Plan::Speak(speech::WELCOME.into()));
        assert!(!outcome.favorites_changed);
    }

    #[test]
    fn repo_updates_plans_a_fetch_for_known_repo() {
        let mut favorites = FavoritesSet::new();
        let outcome = plan(
            &catalog(),
            &TurnRequest::with_slot("RepoUpdates", "Node"),
            &mut favorites,
        );
        match outcome.plan {
            Plan::Fetch { lead_in, entries } => {
                assert_eq!(lead_in, "Here are the updates on node. ");
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].key, key("node"));
            }
            other => panic!("expected fetch plan, got {other:?}"),
        }
    }

    #[test]
    fn repo_updates_unknown_repo_short_circuits() {
        let mut favorites = FavoritesSet::new();
        let outcome = plan(
            &catalog(),
            &TurnRequest::with_slot("RepoUpdates", "unknownthing"),
            &mut favorites,
        );
        assert_eq!(outcome.plan, Plan::Speak(speech::UNKNOWN_REPO.into()));
    }

    #[test]
    fn repo_updates_missing_slot_is_unknown_repo() {
        let mut favorites = FavoritesSet::new();
        let outcome = plan(&catalog(), &TurnRequest::new("RepoUpdates"), &mut favorites);
        assert_eq!(outcome.plan, Plan::Speak(speech::UNKNOWN_REPO.into()));
    }

    #[test]
    fn get_favorites_empty_state() {
        let mut favorites = FavoritesSet::new();
        let outcome = plan(&catalog(), &TurnRequest::new("GetFavorites"), &mut favorites);
        assert_eq!(
            outcome.plan,
            Plan::Speak(speech::NO_FAVORITES_ADD_HINT.into())
        );
    }

    #[test]
    fn get_favorites_lists_in_insertion_order() {
        let mut favorites: FavoritesSet = [key("react"), key("node")].into_iter().collect();
        let outcome = plan(&catalog(), &TurnRequest::new("GetFavorites"), &mut favorites);
        assert_eq!(
            outcome.plan,
            Plan::Speak("Here are your favorites: react, node.".into())
        );
    }

    #[test]
    fn add_favorite_normalizes_slot_and_mutates() {
        let mut favorites = FavoritesSet::new();
        let outcome = plan(
            &catalog(),
            &TurnRequest::with_slot("AddFavorite", "Node"),
            &mut favorites,
        );
        assert_eq!(outcome.plan, Plan::Speak(speech::FAVORITE_ADDED.into()));
        assert!(outcome.favorites_changed);
        assert!(favorites.contains(&key("node")));
    }

    #[test]
    fn add_favorite_twice_is_success_without_change() {
        let mut favorites: FavoritesSet = [key("node")].into_iter().collect();
        let outcome = plan(
            &catalog(),
            &TurnRequest::with_slot("AddFavorite", "node"),
            &mut favorites,
        );
        assert_eq!(outcome.plan, Plan::Speak(speech::FAVORITE_ADDED.into()));
        assert!(!outcome.favorites_changed);
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn add_favorite_unknown_repo_does_not_mutate() {
        let mut favorites = FavoritesSet::new();
        let outcome = plan(
            &catalog(),
            &TurnRequest::with_slot("AddFavorite", "unknownthing"),
            &mut favorites,
        );
        assert_eq!(outcome.plan, Plan::Speak(speech::UNKNOWN_REPO.into()));
        assert!(favorites.is_empty());
    }

    #[test]
    fn remove_favorite_removes_member() {
        let mut favorites: FavoritesSet = [key("node")].into_iter().collect();
        let outcome = plan(
            &catalog(),
            &TurnRequest::with_slot("RemoveFavorite", "node"),
            &mut favorites,
        );
        assert_eq!(outcome.plan, Plan::Speak(speech::FAVORITE_REMOVED.into()));
        assert!(outcome.favorites_changed);
        assert!(favorites.is_empty());
    }

    #[test]
    fn remove_favorite_empty_set_takes_precedence_over_unknown_repo() {
        let mut favorites = FavoritesSet::new();
        let outcome = plan(
            &catalog(),
            &TurnRequest::with_slot("RemoveFavorite", "unknownthing"),
            &mut favorites,
        );
        assert_eq!(outcome.plan, Plan::Speak(speech::NO_FAVORITES.into()));
    }

    #[test]
    fn remove_favorite_non_member_is_success() {
        let mut favorites: FavoritesSet = [key("node")].into_iter().collect();
        let outcome = plan(
            &catalog(),
            &TurnRequest::with_slot("RemoveFavorite", "react"),
            &mut favorites,
        );
        assert_eq!(outcome.plan, Plan::Speak(speech::FAVORITE_REMOVED.into()));
        assert!(!outcome.favorites_changed);
        assert!(favorites.contains(&key("node")));
    }

    #[test]
    fn remove_all_favorites_clears() {
        let mut favorites: FavoritesSet = [key("node"), key("react")].into_iter().collect();
        let outcome = plan(
            &catalog(),
            &TurnRequest::new("RemoveAllFavorites"),
            &mut favorites,
        );
        assert_eq!(
            outcome.plan,
            Plan::Speak(speech::ALL_FAVORITES_REMOVED.into())
        );
        assert!(outcome.favorites_changed);
        assert!(favorites.is_empty());
    }

    #[test]
    fn remove_all_favorites_empty_set_is_guidance() {
        let mut favorites = FavoritesSet::new();
        let outcome = plan(
            &catalog(),
            &TurnRequest::new("RemoveAllFavorites"),
            &mut favorites,
        );
        assert_eq!(outcome.plan, Plan::Speak(speech::NO_FAVORITES.into()));
    }

    #[test]
    fn favorite_updates_plans_entries_in_insertion_order() {
        let mut favorites: FavoritesSet = [key("react"), key("node")].into_iter().collect();
        let outcome = plan(
            &catalog(),
            &TurnRequest::new("FavoriteUpdates"),
            &mut favorites,
        );
        match outcome.plan {
            Plan::Fetch { lead_in, entries } => {
                assert_eq!(lead_in, speech::FAVORITES_LEAD_IN);
                let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
                assert_eq!(keys, vec!["react", "node"]);
            }
            other => panic!("expected fetch plan, got {other:?}"),
        }
    }

    #[test]
    fn favorite_updates_empty_set_is_guidance() {
        let mut favorites = FavoritesSet::new();
        let outcome = plan(
            &catalog(),
            &TurnRequest::new("FavoriteUpdates"),
            &mut favorites,
        );
        assert_eq!(outcome.plan, Plan::Speak(speech::NO_FAVORITES_ADD_ONE.into()));
    }

    #[test]
    fn favorite_updates_skips_keys_no_longer_in_catalog() {
        let mut favorites: FavoritesSet =
            [key("node"), key("retired-repo")].into_iter().collect();
        let outcome = plan(
            &catalog(),
            &TurnRequest::new("FavoriteUpdates"),
            &mut favorites,
        );
        match outcome.plan {
            Plan::Fetch { entries, .. } => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].key, key("node"));
            }
            other => panic!("expected fetch plan, got {other:?}"),
        }
    }

    #[test]
    fn help_stop_cancel_and_fallback() {
        let mut favorites = FavoritesSet::new();
        let help = plan(&catalog(), &TurnRequest::new("AMAZON.HelpIntent"), &mut favorites);
        assert_eq!(help.plan, Plan::Speak(speech::HELP.into()));

        let stop = plan(&catalog(), &TurnRequest::new("AMAZON.StopIntent"), &mut favorites);
        assert_eq!(stop.plan, Plan::Speak(speech::BYE.into()));

        let cancel = plan(&catalog(), &TurnRequest::new("AMAZON.CancelIntent"), &mut favorites);
        assert_eq!(cancel.plan, Plan::Speak(speech::BYE.into()));

        let unknown = plan(&catalog(), &TurnRequest::new("OrderPizza"), &mut favorites);
        assert_eq!(unknown.plan, Plan::Speak(speech::FALLBACK.into()));
    }
}
