//! Cache-aside decorator over a search backend
//!
//! Point reads and searches consult the cache store first. On a miss the
//! inner backend answers and the result is stored with this gateway's TTL.
//!
//! - Absent documents are never cached.
//! - Cache faults (unreachable store, undecodable entry, failed write) are
//!   logged and handled as a miss; they never reach the caller.
//! - Backend faults always reach the caller.
//!
//! Concurrent misses on the same key may each hit the backend. There is no
//! per-request state and no locking here.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use movies_domain::error::Result;
use movies_domain::ports::{CacheEntryConfig, CacheProvider, SearchProvider};
use movies_domain::value_objects::{CacheKey, EntityKind, QueryDescriptor, ResultEnvelope};
use serde_json::Value;
use tracing::{debug, warn};

/// Search provider that caches the results of another one
pub struct CachedSearchProvider {
    inner: Arc<dyn SearchProvider>,
    cache: Arc<dyn CacheProvider>,
    namespace: String,
    entry: CacheEntryConfig,
}

impl CachedSearchProvider {
    /// Wrap `inner`, storing entries under `namespace` for `ttl`
    pub fn new(
        inner: Arc<dyn SearchProvider>,
        cache: Arc<dyn CacheProvider>,
        namespace: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            inner,
            cache,
            namespace: namespace.into(),
            entry: CacheEntryConfig::new().with_ttl(ttl),
        }
    }

    /// TTL applied to entries written by this gateway
    pub fn ttl(&self) -> Duration {
        self.entry.effective_ttl()
    }

    /// Cached JSON for `key`; store faults read as a miss
    async fn lookup(&self, key: &CacheKey) -> Option<String> {
        match self.cache.get_json(key.as_str()).await {
            Ok(Some(json)) => Some(json),
            Ok(None) => None,
            Err(e) => {
                warn!(key = %key, error = %e, "Cache read failed, falling back to backend");
                None
            }
        }
    }

    /// Write-behind of a fresh result; store faults are swallowed
    async fn store(&self, key: &CacheKey, json: &str) {
        if let Err(e) = self.cache.set_json(key.as_str(), json, self.entry).await {
            warn!(key = %key, error = %e, "Cache write failed, serving uncached result");
        }
    }
}

#[async_trait]
impl SearchProvider for CachedSearchProvider {
    async fn get(&self, kind: EntityKind, id: &str) -> Result<Option<Value>> {
        let key = CacheKey::document(&self.namespace, kind, id);

        if let Some(json) = self.lookup(&key).await {
            match serde_json::from_str::<Value>(&json) {
                Ok(document) => {
                    debug!(key = %key, "Cache hit");
                    return Ok(Some(document));
                }
                Err(e) => warn!(key = %key, error = %e, "Discarding undecodable cache entry"),
            }
        }

        debug!(key = %key, "Cache miss");
        let Some(document) = self.inner.get(kind, id).await? else {
            return Ok(None);
        };

        match serde_json::to_string(&document) {
            Ok(json) => self.store(&key, &json).await,
            Err(e) => warn!(key = %key, error = %e, "Failed to serialize document for cache"),
        }
        Ok(Some(document))
    }

    async fn search(&self, descriptor: &QueryDescriptor) -> Result<ResultEnvelope> {
        let key = match CacheKey::search(&self.namespace, descriptor) {
            Ok(key) => key,
            Err(e) => {
                warn!(index = descriptor.index(), error = %e, "Failed to derive cache key");
                return self.inner.search(descriptor).await;
            }
        };

        if let Some(json) = self.lookup(&key).await {
            match serde_json::from_str::<ResultEnvelope>(&json) {
                Ok(envelope) => {
                    debug!(key = %key, total_hits = envelope.total_hits, "Cache hit");
                    return Ok(envelope);
                }
                Err(e) => warn!(key = %key, error = %e, "Discarding undecodable cache entry"),
            }
        }

        debug!(key = %key, "Cache miss");
        let envelope = self.inner.search(descriptor).await?;

        match serde_json::to_string(&envelope) {
            Ok(json) => self.store(&key, &json).await,
            Err(e) => warn!(key = %key, error = %e, "Failed to serialize envelope for cache"),
        }
        Ok(envelope)
    }

    async fn health_check(&self) -> Result<()> {
        self.inner.health_check().await
    }

    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}
