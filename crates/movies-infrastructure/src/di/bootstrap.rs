//! Application bootstrap
//!
//! ```text
//! AppConfig → registries → SearchProvider ─┬─ CachedSearchProvider(films ttl)   → FilmService
//!                          CacheProvider  ─┼─ CachedSearchProvider(persons ttl) → PersonService
//!                                          └─ CachedSearchProvider(genres ttl)  → GenreService
//! ```
//!
//! With caching disabled the services share the bare search provider and
//! the cache slot holds the null provider.

use std::sync::Arc;

use crate::config::{AppConfig, CacheConfig};
use crate::health::{HealthReport, check_health};
use movies_application::ports::registry::{
    CacheProviderConfig, SearchProviderConfig, resolve_cache_provider, resolve_search_provider,
};
use movies_application::ports::{
    FilmServiceInterface, GenreServiceInterface, PersonServiceInterface,
};
use movies_application::{CachedSearchProvider, FilmServiceImpl, GenreServiceImpl, PersonServiceImpl};
use movies_domain::error::{Error, Result};
use movies_domain::ports::{CacheProvider, SearchProvider};
use movies_domain::value_objects::EntityKind;
use tracing::info;

/// Registered name of the no-op cache
const NULL_CACHE_PROVIDER: &str = "null";

/// Assembled application: configuration, backends and entity services
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    search: Arc<dyn SearchProvider>,
    cache: Arc<dyn CacheProvider>,

    films: Arc<dyn FilmServiceInterface>,
    persons: Arc<dyn PersonServiceInterface>,
    genres: Arc<dyn GenreServiceInterface>,
}

impl AppContext {
    /// Assemble services over already-built providers
    ///
    /// Used by [`init_app`] and by tests that bring their own backends.
    pub fn from_providers(
        config: AppConfig,
        search: Arc<dyn SearchProvider>,
        cache: Arc<dyn CacheProvider>,
    ) -> Self {
        let films = FilmServiceImpl::new(gateway_for(&config.cache, EntityKind::Film, &search, &cache));
        let persons =
            PersonServiceImpl::new(gateway_for(&config.cache, EntityKind::Person, &search, &cache));
        let genres =
            GenreServiceImpl::new(gateway_for(&config.cache, EntityKind::Genre, &search, &cache));

        Self {
            config: Arc::new(config),
            search,
            cache,
            films: Arc::new(films),
            persons: Arc::new(persons),
            genres: Arc::new(genres),
        }
    }

    /// Film service
    pub fn films(&self) -> Arc<dyn FilmServiceInterface> {
        Arc::clone(&self.films)
    }

    /// Person service
    pub fn persons(&self) -> Arc<dyn PersonServiceInterface> {
        Arc::clone(&self.persons)
    }

    /// Genre service
    pub fn genres(&self) -> Arc<dyn GenreServiceInterface> {
        Arc::clone(&self.genres)
    }

    /// Uncached search backend
    pub fn search_provider(&self) -> Arc<dyn SearchProvider> {
        Arc::clone(&self.search)
    }

    /// Cache store
    pub fn cache_provider(&self) -> Arc<dyn CacheProvider> {
        Arc::clone(&self.cache)
    }

    /// Probe both backends
    pub async fn health(&self) -> HealthReport {
        check_health(&self.search, &self.cache).await
    }
}

/// Cache-aside gateway for `kind`, or the bare backend when caching is off
fn gateway_for(
    config: &CacheConfig,
    kind: EntityKind,
    search: &Arc<dyn SearchProvider>,
    cache: &Arc<dyn CacheProvider>,
) -> Arc<dyn SearchProvider> {
    if !config.enabled {
        return Arc::clone(search);
    }
    Arc::new(CachedSearchProvider::new(
        Arc::clone(search),
        Arc::clone(cache),
        config.namespace.clone(),
        config.ttl(kind),
    ))
}

/// Resolve providers from `config` and assemble the application
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing application context");

    let search = resolve_search_provider(&SearchProviderConfig::from(&config.search))
        .map_err(|e| Error::config(format!("Search: {e}")))?;

    let cache_config = if config.cache.enabled {
        CacheProviderConfig::from(&config.cache)
    } else {
        CacheProviderConfig::new(NULL_CACHE_PROVIDER)
    };
    let cache = resolve_cache_provider(&cache_config)
        .map_err(|e| Error::config(format!("Cache: {e}")))?;

    info!(
        search = search.provider_name(),
        cache = cache.provider_name(),
        cache_enabled = config.cache.enabled,
        "Resolved providers"
    );

    Ok(AppContext::from_providers(config, search, cache))
}
