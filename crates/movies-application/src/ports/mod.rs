//! Application Ports
//!
//! - **registry/** - name-based provider discovery (linkme distributed slices)
//! - **services** - entity service contracts consumed by the HTTP layer

/// Provider registries
pub mod registry;
/// Entity service interfaces
pub mod services;

pub use movies_domain::ports::{CacheEntryConfig, CacheProvider, SearchProvider};
pub use services::{FilmServiceInterface, GenreServiceInterface, PersonServiceInterface};
