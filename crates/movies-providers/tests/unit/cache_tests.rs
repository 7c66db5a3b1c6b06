//! Cache provider tests

use std::time::Duration;

use movies_domain::ports::{CacheEntryConfig, CacheProvider};
use movies_providers::cache::{MokaCacheProvider, NullCacheProvider};

#[tokio::test]
async fn test_moka_round_trip() {
    let cache = MokaCacheProvider::with_capacity(100);
    let json = r#"{"total_hits":3,"documents":[{"id":"a","imdb_rating":9.5}]}"#;

    cache
        .set_json("movies:search:abc", json, CacheEntryConfig::default())
        .await
        .unwrap();

    let cached = cache.get_json("movies:search:abc").await.unwrap();
    assert_eq!(cached.as_deref(), Some(json));
    assert_eq!(cache.size().await.unwrap(), 1);
}

#[tokio::test]
async fn test_moka_miss() {
    let cache = MokaCacheProvider::new();
    assert_eq!(cache.get_json("absent").await.unwrap(), None);
}

#[tokio::test]
async fn test_moka_entry_expires_after_its_own_ttl() {
    let cache = MokaCacheProvider::with_capacity(100);

    cache
        .set_json(
            "short",
            "1",
            CacheEntryConfig::new().with_ttl(Duration::from_millis(50)),
        )
        .await
        .unwrap();
    cache
        .set_json("long", "2", CacheEntryConfig::new().with_ttl_secs(60))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_eq!(cache.get_json("short").await.unwrap(), None);
    assert_eq!(cache.get_json("long").await.unwrap().as_deref(), Some("2"));
}

#[tokio::test]
async fn test_moka_clear() {
    let cache = MokaCacheProvider::new();
    cache
        .set_json("k", "\"v\"", CacheEntryConfig::default())
        .await
        .unwrap();

    cache.clear().await.unwrap();

    assert_eq!(cache.size().await.unwrap(), 0);
    assert!(cache.health_check().await.is_ok());
}

#[tokio::test]
async fn test_null_cache_never_stores() {
    let cache = NullCacheProvider::new();
    cache
        .set_json("k", "\"v\"", CacheEntryConfig::default())
        .await
        .unwrap();

    assert_eq!(cache.get_json("k").await.unwrap(), None);
    assert_eq!(cache.size().await.unwrap(), 0);
    assert_eq!(cache.provider_name(), "null");
}

#[cfg(feature = "cache-redis")]
#[tokio::test]
async fn test_redis_unreachable_is_cache_error() {
    use movies_providers::cache::RedisCacheProvider;

    // Nothing listens on port 1
    let cache = RedisCacheProvider::new("redis://127.0.0.1:1", Duration::from_millis(500)).unwrap();

    let err = cache.get_json("k").await.unwrap_err();
    assert!(matches!(err, movies_domain::Error::Cache { .. }));
    assert!(cache.health_check().await.is_err());
}

#[cfg(feature = "cache-redis")]
#[test]
fn test_redis_expiry_never_drops_to_zero() {
    use movies_providers::cache::redis::expiry_seconds;

    assert_eq!(expiry_seconds(Duration::from_millis(50)), 1);
    assert_eq!(expiry_seconds(Duration::ZERO), 1);
    assert_eq!(expiry_seconds(Duration::from_secs(300)), 300);
    assert_eq!(expiry_seconds(Duration::from_millis(1500)), 2);
}
