//! # Movies Catalog - Provider Implementations
//!
//! Concrete backends for the ports defined in `movies-domain`. Each provider
//! registers itself into the `movies-application` registries so it can be
//! selected by name from configuration.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Search | `SearchProvider` | Elasticsearch, InMemory |
//! | Cache | `CacheProvider` | Moka, Redis, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! movies-providers = { version = "0.1", default-features = false, features = ["search-memory", "cache-moka"] }
//! ```

pub use movies_domain::error::{Error, Result};
pub use movies_domain::ports::{CacheProvider, SearchProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Search provider implementations
pub mod search;

/// Cache provider implementations
pub mod cache;
