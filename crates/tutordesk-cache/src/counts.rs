//! In-memory cache of resource counts.
//!
//! Dashboard tiles show how many teachers, students, chapters etc. exist.
//! Counting means a list request, so counts are cached per (resource,
//! filters) for a short TTL and dropped whenever that resource is mutated.

use moka::future::Cache;
use serde::Serialize;
use std::future::Future;
use tracing::{debug, instrument, warn};

use crate::config::CacheConfig;
use crate::keys::{counts, hash_filters};

/// Error type for cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Failed to register invalidation predicate: {0}")]
    Invalidation(#[from] moka::PredicateError),
}

/// Cloneable handle to a shared count cache.
#[derive(Clone)]
pub struct CountCache {
    inner: Cache<String, u64>,
}

impl std::fmt::Debug for CountCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountCache")
            .field("entries", &self.inner.entry_count())
            .finish_non_exhaustive()
    }
}

impl CountCache {
    pub fn new(config: &CacheConfig) -> Self {
        let inner = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl)
            .support_invalidation_closures()
            .build();

        Self { inner }
    }

    /// Returns the cached count of `resource` under `filters`, if fresh.
    #[instrument(skip(self, filters), fields(cache.operation = "GET"))]
    pub async fn get<F: Serialize>(&self, resource: &str, filters: &F) -> Option<u64> {
        let key = counts::resource(resource, &hash_filters(filters));
        let hit = self.inner.get(&key).await;
        debug!(cache.key = %key, hit = hit.is_some(), "Count cache lookup");
        hit
    }

    #[instrument(skip(self, filters), fields(cache.operation = "SET"))]
    pub async fn insert<F: Serialize>(&self, resource: &str, filters: &F, count: u64) {
        let key = counts::resource(resource, &hash_filters(filters));
        debug!(cache.key = %key, count, "Count cached");
        self.inner.insert(key, count).await;
    }

    /// Returns the cached count or runs `fetch` and caches its result.
    ///
    /// Failed fetches are not cached.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        resource: &str,
        filters: &F,
        fetch: impl FnOnce() -> Fut,
    ) -> Result<u64, E>
    where
        F: Serialize,
        Fut: Future<Output = Result<u64, E>>,
    {
        if let Some(count) = self.get(resource, filters).await {
            return Ok(count);
        }

        let count = fetch().await?;
        self.insert(resource, filters, count).await;
        Ok(count)
    }

    /// Drops every cached count of `resource`, whatever the filters.
    ///
    /// Call this after creating or deleting a record of that resource.
    #[instrument(skip(self), fields(cache.operation = "INVALIDATE"))]
    pub fn invalidate_resource(&self, resource: &str) -> Result<(), CacheError> {
        let prefix = counts::resource_prefix(resource);
        self.inner
            .invalidate_entries_if(move |key, _| key.starts_with(&prefix))?;
        debug!(resource, "Count cache invalidated");
        Ok(())
    }

    /// Like [`invalidate_resource`](Self::invalidate_resource) but only logs failures.
    pub fn invalidate_quietly(&self, resource: &str) {
        if let Err(e) = self.invalidate_resource(resource) {
            warn!(error = %e, resource, "Failed to invalidate count cache, clearing it");
            self.inner.invalidate_all();
        }
    }

    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}
