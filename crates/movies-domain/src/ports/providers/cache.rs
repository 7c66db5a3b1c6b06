//! Cache Provider Port
//!
//! Port for cache backend providers. Supports distributed (Redis), in-memory
//! (Moka) and null providers.
//!
//! Values are JSON text, so structured data round-trips without losing field
//! identity or type. There is no invalidation operation: the catalog is
//! read-only and staleness is bounded by the entry TTL alone.

use crate::constants::DEFAULT_CACHE_TTL_SECS;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache Entry Configuration
///
/// # Example
///
/// ```
/// use movies_domain::ports::CacheEntryConfig;
/// use std::time::Duration;
///
/// let config = CacheEntryConfig::default().with_ttl(Duration::from_secs(600));
/// assert_eq!(config.effective_ttl(), Duration::from_secs(600));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntryConfig {
    /// Time to live for the cache entry
    pub ttl: Option<Duration>,
}

impl CacheEntryConfig {
    /// Create a new cache entry config with default TTL
    pub fn new() -> Self {
        Self {
            ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
        }
    }

    /// Set the TTL for the cache entry
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set TTL in seconds
    #[must_use]
    pub fn with_ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = Some(Duration::from_secs(secs));
        self
    }

    /// Get the effective TTL, falling back to default
    pub fn effective_ttl(&self) -> Duration {
        self.ttl
            .unwrap_or(Duration::from_secs(DEFAULT_CACHE_TTL_SECS))
    }
}

impl Default for CacheEntryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache Provider Port
///
/// # Implementations
///
/// - **Redis**: Distributed cache shared by every server instance
/// - **Moka**: In-memory cache for single-instance deployments
/// - **Null**: No-op provider that disables caching
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get a value from the cache as JSON string
    ///
    /// # Returns
    /// The cached JSON string if present, None if not found or expired
    async fn get_json(&self, key: &str) -> Result<Option<String>>;

    /// Set a value in the cache from JSON string
    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()>;

    /// Clear all values from the cache
    async fn clear(&self) -> Result<()>;

    /// Get the cache size (number of entries)
    async fn size(&self) -> Result<usize>;

    /// Verify the store is reachable
    async fn health_check(&self) -> Result<()> {
        self.size().await.map(|_| ())
    }

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
