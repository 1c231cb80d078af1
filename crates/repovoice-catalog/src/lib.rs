// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static repository catalog.
//!
//! Maps normalized repository keys to their known metadata. Lookups
//! normalize raw slot text first, so "  Node " and "node" resolve to the
//! same entry. The catalog is process-local and read-only once built;
//! per-turn update fields never live here.

use std::collections::BTreeMap;
use std::path::Path;

use repovoice_core::{CatalogEntry, RepoKey, RepoVoiceError};
use serde::Deserialize;
use tracing::debug;

/// Read-only table of known repositories, keyed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<RepoKey, CatalogEntry>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in default catalog.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (key, display, full) in [
            ("node", "Node", "nodejs/node"),
            ("react", "React", "facebook/react"),
            ("vue", "Vue", "vuejs/vue"),
            ("rust", "Rust", "rust-lang/rust"),
            ("tokio", "Tokio", "tokio-rs/tokio"),
            ("kubernetes", "Kubernetes", "kubernetes/kubernetes"),
            ("tensorflow", "TensorFlow", "tensorflow/tensorflow"),
            ("linux", "Linux", "torvalds/linux"),
        ] {
            catalog.insert(CatalogEntry {
                key: RepoKey::from_normalized(key),
                display_name: display.to_string(),
                full_name: full.to_string(),
            });
        }
        catalog
    }

    /// Parses a catalog from TOML text (`[repos.<key>]` tables).
    ///
    /// Keys are normalized on load, so a file may spell them loosely.
    pub fn from_toml_str(text: &str) -> Result<Self, RepoVoiceError> {
        let file: CatalogFile = toml::from_str(text)
            .map_err(|e| RepoVoiceError::Catalog(format!("malformed catalog file: {e}")))?;

        let mut catalog = Self::new();
        for (raw_key, entry) in file.repos {
            let key = RepoKey::normalize(&raw_key);
            if key.is_empty() {
                return Err(RepoVoiceError::Catalog(format!(
                    "catalog key {raw_key:?} normalizes to nothing"
                )));
            }
            catalog.insert(CatalogEntry {
                key,
                display_name: entry.display_name,
                full_name: entry.full_name,
            });
        }
        debug!(entries = catalog.len(), "catalog loaded from TOML");
        Ok(catalog)
    }

    /// Loads a catalog from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, RepoVoiceError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            RepoVoiceError::Catalog(format!("cannot read catalog {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    /// Resolves raw slot text to a catalog entry.
    ///
    /// Normalizes first; empty or unresolvable text is treated identically
    /// to an unknown repository.
    pub fn lookup(&self, raw: &str) -> Option<&CatalogEntry> {
        let key = RepoKey::normalize(raw);
        if key.is_empty() {
            return None;
        }
        self.entries.get(&key)
    }

    /// Resolves an already-normalized key (favorites iteration).
    pub fn get(&self, key: &RepoKey) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// On-disk catalog shape.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    repos: BTreeMap<String, CatalogFileEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFileEntry {
    display_name: String,
    full_name: String,
}
