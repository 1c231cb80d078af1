// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./repovoice.toml` >
//! `~/.config/repovoice/repovoice.toml` > `/etc/repovoice/repovoice.toml`,
//! with environment variable overrides via the `REPOVOICE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::RepovoiceConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/repovoice/repovoice.toml` (system-wide)
/// 3. `~/.config/repovoice/repovoice.toml` (user XDG config)
/// 4. `./repovoice.toml` (local directory)
/// 5. `REPOVOICE_*` environment variables
pub fn load_config() -> Result<RepovoiceConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RepovoiceConfig::default()))
        .merge(Toml::file("/etc/repovoice/repovoice.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("repovoice/repovoice.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("repovoice.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<RepovoiceConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RepovoiceConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<RepovoiceConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RepovoiceConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-containing
/// key names stay unambiguous: `REPOVOICE_FETCH_TIMEOUT_SECS` must map to
/// `fetch.timeout_secs`, not `fetch.timeout.secs`.
fn env_provider() -> Env {
    Env::prefixed("REPOVOICE_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("fetch_", "fetch.", 1)
            .replacen("catalog_", "catalog.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
