//! # Domain Layer
//!
//! Core types of the Movies catalog: the entity records served to clients,
//! the structured query descriptor handed to search backends, the result
//! envelope they return, and the ports that backends implement.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Film, Person and Genre records and their short projections |
//! | [`value_objects`] | Query descriptors, result envelopes, cache keys, pagination |
//! | [`ports`] | `SearchProvider` and `CacheProvider` contracts |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Field weights, fuzziness, page and window defaults |
//!
//! The domain performs no I/O. Backends live in `movies-providers`; the
//! caching decorator and query builder live in `movies-application`.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
