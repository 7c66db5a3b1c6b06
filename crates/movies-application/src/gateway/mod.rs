//! Cached Search Gateway
//!
//! The gateway is a [`SearchProvider`](movies_domain::ports::SearchProvider)
//! decorator: the direct backend adapter and the cached variant implement the
//! same port and are chosen when the application is assembled.

/// Cache-aside decorator
pub mod cached;

pub use cached::CachedSearchProvider;
