// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Repovoice skill.
//!
//! This crate provides the foundational types, error taxonomy, and the
//! fetcher trait used throughout the Repovoice workspace. The catalog,
//! favorites, update, and dispatch crates all build on definitions here.

pub mod error;
pub mod fetcher;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::RepoVoiceError;
pub use fetcher::UpdateFetcher;
pub use types::{
    CatalogEntry, Intent, RepoKey, RepoMetadata, TurnRequest, TurnResponse, UpdateRecord,
};
