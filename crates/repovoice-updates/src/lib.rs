// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Update merging and fetching for the Repovoice skill.
//!
//! This crate provides:
//! - [`merger`]: pure folding of fetched records into per-turn metadata and
//!   deterministic speech rendering
//! - [`GitHubFetcher`]: the [`repovoice_core::UpdateFetcher`] implementation
//!   backed by the GitHub REST API

pub mod github;
pub mod merger;

pub use github::GitHubFetcher;
pub use merger::{merge, merge_for, render_speech};
