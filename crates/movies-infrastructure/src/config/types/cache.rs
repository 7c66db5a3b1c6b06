//! Cache configuration types

use std::time::Duration;

use crate::constants::{
    DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_NAMESPACE, DEFAULT_CACHE_PROVIDER,
    DEFAULT_CACHE_TIMEOUT_SECS, DEFAULT_CACHE_URI,
};
use movies_application::ports::registry::CacheProviderConfig;
use movies_domain::constants::DEFAULT_CACHE_TTL_SECS;
use movies_domain::value_objects::EntityKind;
use serde::{Deserialize, Serialize};

/// Cache configuration
///
/// TTLs are per entity kind: each entity service gets its own gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Wrap the search backend with the cache-aside gateway
    pub enabled: bool,
    /// Registered provider name ("redis", "moka", "null")
    pub provider: String,
    /// Connection URI (redis)
    pub uri: String,
    /// Key namespace prefix
    pub namespace: String,
    /// Maximum entries (moka)
    pub max_entries: u64,
    /// Per-operation timeout in seconds (redis)
    pub timeout_secs: u64,
    /// TTL of film entries in seconds
    pub films_ttl_secs: u64,
    /// TTL of person entries in seconds
    pub persons_ttl_secs: u64,
    /// TTL of genre entries in seconds
    pub genres_ttl_secs: u64,
}

impl CacheConfig {
    /// TTL for entries served by the `kind` service
    pub fn ttl(&self, kind: EntityKind) -> Duration {
        let secs = match kind {
            EntityKind::Film => self.films_ttl_secs,
            EntityKind::Person => self.persons_ttl_secs,
            EntityKind::Genre => self.genres_ttl_secs,
        };
        Duration::from_secs(secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: DEFAULT_CACHE_PROVIDER.to_string(),
            uri: DEFAULT_CACHE_URI.to_string(),
            namespace: DEFAULT_CACHE_NAMESPACE.to_string(),
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            timeout_secs: DEFAULT_CACHE_TIMEOUT_SECS,
            films_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            persons_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            genres_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl From<&CacheConfig> for CacheProviderConfig {
    fn from(config: &CacheConfig) -> Self {
        CacheProviderConfig::new(&config.provider)
            .with_uri(&config.uri)
            .with_max_entries(config.max_entries)
            .with_timeout_secs(config.timeout_secs)
    }
}
