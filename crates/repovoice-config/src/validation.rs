// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation.
//!
//! Figment catches type and unknown-key errors; the checks here cover
//! values that parse fine but cannot work at runtime.

use crate::model::RepovoiceConfig;
use crate::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validates a parsed configuration, collecting every problem instead of
/// stopping at the first.
pub fn validate_config(config: &RepovoiceConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.fetch.timeout_secs == 0 {
        errors.push(ConfigError::new(
            "fetch.timeout_secs",
            "must be at least 1 second; a zero bound would fail every fetch",
        ));
    }

    if !config.fetch.api_base.starts_with("http://") && !config.fetch.api_base.starts_with("https://")
    {
        errors.push(ConfigError::new(
            "fetch.api_base",
            format!("{:?} is not an http(s) URL", config.fetch.api_base),
        ));
    }

    if config.fetch.user_agent.trim().is_empty() {
        errors.push(ConfigError::new(
            "fetch.user_agent",
            "must not be empty; the update API rejects requests without one",
        ));
    }

    if !LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::new(
            "agent.log_level",
            format!(
                "unknown level {:?}; expected one of {}",
                config.agent.log_level,
                LOG_LEVELS.join(", ")
            ),
        ));
    }

    if config.storage.session_path.trim().is_empty() {
        errors.push(ConfigError::new(
            "storage.session_path",
            "must not be empty",
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
