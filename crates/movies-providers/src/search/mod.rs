//! Search Provider Implementations
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`ElasticsearchProvider`] | Elasticsearch over its HTTP/JSON API |
//! | [`InMemorySearchProvider`] | Evaluates descriptors over documents held in memory |

#[cfg(feature = "search-elasticsearch")]
pub mod elasticsearch;
#[cfg(feature = "search-memory")]
pub mod in_memory;

#[cfg(feature = "search-elasticsearch")]
pub use elasticsearch::ElasticsearchProvider;
#[cfg(feature = "search-memory")]
pub use in_memory::InMemorySearchProvider;
