//! Application Layer - Movies Catalog
//!
//! Orchestrates the read path of the catalog: entity services turn typed
//! requests into query descriptors, run them through a [`SearchProvider`]
//! (usually the caching decorator) and map raw documents into records.
//!
//! ## Modules
//!
//! - [`query_builder`]: pure functions producing `QueryDescriptor`s
//! - [`gateway`]: `CachedSearchProvider`, the cache-aside decorator
//! - [`domain_services`]: entity service interfaces
//! - [`use_cases`]: film, person and genre service implementations
//! - [`ports::registry`]: compile-time registries for search and cache providers
//!
//! ## Dependencies
//!
//! This crate depends only on `movies-domain` and pure libraries. Concrete
//! backends register themselves from `movies-providers`.
//!
//! [`SearchProvider`]: movies_domain::ports::SearchProvider

pub mod domain_services;
pub mod gateway;
pub mod ports;
pub mod query_builder;
pub mod use_cases;

pub use domain_services::*;
pub use gateway::CachedSearchProvider;
pub use use_cases::*;
