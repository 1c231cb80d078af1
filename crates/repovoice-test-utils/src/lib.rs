// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Repovoice tests.
//!
//! Provides mock adapters for fast, deterministic, CI-runnable tests
//! without external services.
//!
//! # Components
//!
//! - [`MockFetcher`] - Scripted update fetcher with failure and hang injection
//! - [`MemorySessionStore`] - HashMap-backed session store

pub mod memory_store;
pub mod mock_fetcher;

pub use memory_store::MemorySessionStore;
pub use mock_fetcher::{MockFetch, MockFetcher};
