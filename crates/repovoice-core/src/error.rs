// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Repovoice skill.

use thiserror::Error;

/// The primary error type used across Repovoice crates.
///
/// Nothing in this enum ever reaches the user's ears: the dispatcher
/// recovers every variant into a spoken message and logs the detail for
/// operators.
#[derive(Debug, Error)]
pub enum RepoVoiceError {
    /// Configuration errors (invalid TOML, unknown keys, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Catalog errors (unreadable or malformed catalog file).
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Update fetch errors (HTTP failure, malformed payload).
    #[error("fetch error: {message}")]
    Fetch {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A fetch did not resolve within the configured bound.
    #[error("fetch timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Session store errors (unreadable or unwritable attribute bags).
    #[error("session store error: {message}")]
    Store {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_render_without_internals() {
        let err = RepoVoiceError::Fetch {
            message: "repository endpoint returned 503".into(),
            source: None,
        };
        assert_eq!(err.to_string(), "fetch error: repository endpoint returned 503");

        let err = RepoVoiceError::Timeout {
            duration: std::time::Duration::from_secs(8),
        };
        assert!(err.to_string().contains("8s"));
    }
}
