//! Value Objects
//!
//! Immutable values exchanged between the query builder, the cached search
//! gateway and the search backends.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`EntityKind`] | Film, person or genre, with its backing index |
//! | [`QueryDescriptor`] | Backend-agnostic structured query |
//! | [`ResultEnvelope`] | Total hit count plus the windowed documents |
//! | [`CacheKey`] | Deterministic key derived from a lookup or query shape |
//! | [`PageRequest`] / [`Page`] | 1-based pagination input and output |

/// Cache key derivation
pub mod cache_key;
/// Pagination value objects
pub mod pagination;
/// Query descriptor value objects
pub mod query;
/// Search result value objects
pub mod search;

pub use cache_key::CacheKey;
pub use pagination::{Page, PageRequest};
pub use query::{
    EntityKind, FieldBoost, FilmSort, Filter, FullTextQuery, QueryDescriptor, SortDirection,
    SortDirective, Window,
};
pub use search::ResultEnvelope;
