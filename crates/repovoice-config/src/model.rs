// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Repovoice skill.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Repovoice configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RepovoiceConfig {
    /// Skill identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Update fetcher settings.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Repository catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Session store settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Skill identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the skill.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "repovoice".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Update fetcher configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    /// Turn-level bound on any fetch, in seconds. A fetch that has not
    /// resolved by then is treated as failed so the turn still answers.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Base URL of the update API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// User-Agent sent with every request. GitHub requires one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            api_base: default_api_base(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    8
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    "repovoice/0.1".to_string()
}

/// Repository catalog configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Path to a TOML catalog file. Unset means the built-in catalog.
    #[serde(default)]
    pub path: Option<String>,
}

/// Session store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path of the JSON session file.
    #[serde(default = "default_session_path")]
    pub session_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_path: default_session_path(),
        }
    }
}

fn default_session_path() -> String {
    dirs::data_dir()
        .map(|d| d.join("repovoice/sessions.json").display().to_string())
        .unwrap_or_else(|| "repovoice-sessions.json".to_string())
}
