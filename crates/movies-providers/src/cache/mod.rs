//! Cache Provider Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Disabled | Every read misses, writes are dropped |
//! | [`MokaCacheProvider`] | Local | In-memory cache with per-entry TTL |
//! | [`RedisCacheProvider`] | Distributed | Redis-backed, shared by every instance |

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;

#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheProvider;
pub use null::NullCacheProvider;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheProvider;

pub use movies_domain::ports::CacheEntryConfig;
