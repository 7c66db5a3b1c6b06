//! Redis distributed cache provider
//!
//! Values are stored as JSON strings with `SET key value EX ttl`; sub-second
//! TTLs round up to one second. Every command is bounded by the configured
//! timeout; a slow or unreachable server surfaces as [`Error::Cache`],
//! which the cached gateway treats as a miss.
//!
//! ## Example
//!
//! ```ignore
//! use movies_providers::cache::RedisCacheProvider;
//! use std::time::Duration;
//!
//! let provider = RedisCacheProvider::new("redis://localhost:6379", Duration::from_secs(2))?;
//! ```

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use movies_domain::error::{Error, Result};
use movies_domain::ports::{CacheEntryConfig, CacheProvider};
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};

use crate::constants::{REDIS_DEFAULT_TIMEOUT_SECS, REDIS_DEFAULT_URI};

/// Whole seconds passed to `SET .. EX`, rounded up and never zero
pub fn expiry_seconds(ttl: Duration) -> u64 {
    let seconds = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
    seconds.max(1)
}

/// Redis cache provider
#[derive(Clone)]
pub struct RedisCacheProvider {
    client: Client,
    timeout: Duration,
}

impl RedisCacheProvider {
    /// Create a new Redis cache provider with connection string
    ///
    /// No connection is opened here; the first command connects.
    pub fn new(connection_string: &str, timeout: Duration) -> Result<Self> {
        let client = Client::open(connection_string)
            .map_err(|e| Error::cache_with_source("Failed to create Redis client", e))?;

        Ok(Self { client, timeout })
    }

    /// Run `operation` under the command timeout
    async fn bounded<T, F>(&self, command: &str, operation: F) -> Result<T>
    where
        F: Future<Output = redis::RedisResult<T>>,
    {
        match tokio::time::timeout(self.timeout, operation).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(Error::cache_with_source(format!("Redis {command} failed"), e)),
            Err(_) => Err(Error::cache(format!(
                "Redis {command} timed out after {:?}",
                self.timeout
            ))),
        }
    }

    /// Get a multiplexed connection
    async fn get_connection(&self) -> Result<MultiplexedConnection> {
        self.bounded(
            "CONNECT",
            self.client.get_multiplexed_async_connection(),
        )
        .await
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.get_connection().await?;
        self.bounded("GET", conn.get::<_, Option<String>>(key)).await
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let mut conn = self.get_connection().await?;
        let ttl_seconds = expiry_seconds(config.effective_ttl());

        self.bounded("SET", conn.set_ex::<_, _, ()>(key, value, ttl_seconds))
            .await
    }

    async fn clear(&self) -> Result<()> {
        let mut conn = self.get_connection().await?;
        self.bounded(
            "FLUSHDB",
            redis::cmd("FLUSHDB").query_async::<()>(&mut conn),
        )
        .await
    }

    async fn size(&self) -> Result<usize> {
        let mut conn = self.get_connection().await?;
        self.bounded(
            "DBSIZE",
            redis::cmd("DBSIZE").query_async::<usize>(&mut conn),
        )
        .await
    }

    async fn health_check(&self) -> Result<()> {
        let mut conn = self.get_connection().await?;
        self.bounded("PING", redis::cmd("PING").query_async::<String>(&mut conn))
            .await
            .map(|_| ())
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use movies_application::ports::registry::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};

/// Factory function for creating Redis cache provider instances.
fn redis_cache_factory(
    config: &CacheProviderConfig,
) -> std::result::Result<Arc<dyn CacheProvider>, String> {
    let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URI);
    let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(REDIS_DEFAULT_TIMEOUT_SECS));

    let provider = RedisCacheProvider::new(uri, timeout)
        .map_err(|e| format!("Failed to create Redis provider: {e}"))?;

    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static REDIS_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "redis",
    description: "Redis distributed cache",
    factory: redis_cache_factory,
};
