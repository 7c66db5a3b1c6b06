//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | SearchProvider | Point lookups and structured queries against a document search backend |
//! | CacheProvider | Key/value store holding JSON text with a TTL |

/// Cache provider port
pub mod cache;
/// Search provider port
pub mod search;

pub use cache::{CacheEntryConfig, CacheProvider};
pub use search::SearchProvider;
