// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Update fetcher trait: the asynchronous boundary to the update source.

use async_trait::async_trait;

use crate::error::RepoVoiceError;
use crate::types::{CatalogEntry, UpdateRecord};

/// Asynchronous source of repository update records.
///
/// Implementations may reject (network failure, timeout) and `fetch_many`
/// may partially fail. Returned records carry their originating repo key
/// and come with no ordering guarantee; consumers must not depend on
/// record order.
#[async_trait]
pub trait UpdateFetcher: Send + Sync {
    /// Fetches update records for a single repository.
    async fn fetch_one(&self, entry: &CatalogEntry) -> Result<Vec<UpdateRecord>, RepoVoiceError>;

    /// Fetches update records for several repositories at once.
    ///
    /// Per-repository failures are tolerated: a repository that fails
    /// contributes no records. The call as a whole errors only when no
    /// repository could be fetched.
    async fn fetch_many(
        &self,
        entries: &[CatalogEntry],
    ) -> Result<Vec<UpdateRecord>, RepoVoiceError>;
}
