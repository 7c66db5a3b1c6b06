//! Provider registration tests
//!
//! Linking this crate registers its providers into the application
//! registries; these tests resolve them by name.

// Force linkme registration of all providers from movies-providers
extern crate movies_providers;

use movies_application::ports::registry::{
    CacheProviderConfig, SearchProviderConfig, list_cache_providers, list_search_providers,
    resolve_cache_provider, resolve_search_provider,
};

#[test]
fn test_search_providers_registered() {
    let names: Vec<_> = list_search_providers().into_iter().map(|(n, _)| n).collect();
    assert!(names.contains(&"elasticsearch"), "Available: {names:?}");
    assert!(names.contains(&"memory"), "Available: {names:?}");
}

#[test]
fn test_cache_providers_registered() {
    let names: Vec<_> = list_cache_providers().into_iter().map(|(n, _)| n).collect();
    assert!(names.contains(&"moka"), "Available: {names:?}");
    assert!(names.contains(&"null"), "Available: {names:?}");
    assert!(names.contains(&"redis"), "Available: {names:?}");
}

#[test]
fn test_resolve_by_name() {
    let search = resolve_search_provider(&SearchProviderConfig::new("memory")).unwrap();
    assert_eq!(search.provider_name(), "memory");

    let cache =
        resolve_cache_provider(&CacheProviderConfig::new("moka").with_max_entries(10)).unwrap();
    assert_eq!(cache.provider_name(), "moka");

    let es = resolve_search_provider(
        &SearchProviderConfig::new("elasticsearch")
            .with_url("http://localhost:9200")
            .with_timeout_secs(1),
    )
    .unwrap();
    assert_eq!(es.provider_name(), "elasticsearch");
}

#[test]
fn test_unknown_provider_lists_available() {
    let Err(err) = resolve_search_provider(&SearchProviderConfig::new("solr")) else {
        panic!("solr should not resolve");
    };
    assert!(err.contains("Unknown search provider 'solr'"));
    assert!(err.contains("memory"));

    let Err(err) = resolve_cache_provider(&CacheProviderConfig::new("memcached")) else {
        panic!("memcached should not resolve");
    };
    assert!(err.contains("Available providers"));
}
