//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for backend providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = redis" → RedisCacheProvider  │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in movies-providers)
//!
//! ```ignore
//! use movies_application::ports::registry::{SEARCH_PROVIDERS, SearchProviderEntry};
//!
//! #[linkme::distributed_slice(SEARCH_PROVIDERS)]
//! static ELASTICSEARCH_PROVIDER: SearchProviderEntry = SearchProviderEntry {
//!     name: "elasticsearch",
//!     description: "Elasticsearch HTTP search backend",
//!     factory: |config| Ok(Arc::new(ElasticsearchProvider::from_config(config)?)),
//! };
//! ```
//!
//! ### Resolving a Provider (in movies-infrastructure)
//!
//! ```ignore
//! use movies_application::ports::registry::{SearchProviderConfig, resolve_search_provider};
//!
//! let config = SearchProviderConfig::new("elasticsearch").with_url("http://localhost:9200");
//! let provider = resolve_search_provider(&config)?;
//! ```

pub mod cache;
pub mod search;

pub use cache::{
    CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry, list_cache_providers,
    resolve_cache_provider,
};
pub use search::{
    SEARCH_PROVIDERS, SearchProviderConfig, SearchProviderEntry, list_search_providers,
    resolve_search_provider,
};
