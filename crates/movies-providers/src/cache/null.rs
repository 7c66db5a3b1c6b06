//! Null cache provider
//!
//! Accepts every write and answers every read with a miss. Selecting it
//! turns the cached gateway into a pass-through.

use async_trait::async_trait;
use movies_domain::error::Result;
use movies_domain::ports::{CacheEntryConfig, CacheProvider};

/// Null cache provider
#[derive(Debug, Clone, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Create a new null cache provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheProvider for NullCacheProvider {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_json(&self, _key: &str, _value: &str, _config: CacheEntryConfig) -> Result<()> {
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    async fn size(&self) -> Result<usize> {
        Ok(0)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use movies_application::ports::registry::{CACHE_PROVIDERS, CacheProviderEntry};

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static NULL_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "null",
    description: "No-op cache (caching disabled)",
    factory: |_config| Ok(std::sync::Arc::new(NullCacheProvider::new())),
};
