//! Catalog Entities
//!
//! Plain projections of raw backend documents. Entities have no lifecycle of
//! their own: they are materialized for one request and dropped with it.

/// Film records
pub mod film;
/// Genre records
pub mod genre;
/// Person records
pub mod person;

pub use film::{Film, FilmShort, GenreShort, PersonShort};
pub use genre::Genre;
pub use person::{Person, PersonFilms};

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// Map a raw backend document into a typed record
///
/// A document that does not fit the record shape is malformed backend data,
/// reported as an internal error rather than as an absent entity.
pub fn from_document<T: DeserializeOwned>(document: serde_json::Value) -> Result<T> {
    serde_json::from_value(document)
        .map_err(|e| Error::internal(format!("Malformed document in search backend: {e}")))
}

/// Map a list of raw documents, preserving order
pub fn from_documents<T: DeserializeOwned>(documents: Vec<serde_json::Value>) -> Result<Vec<T>> {
    documents.into_iter().map(from_document).collect()
}
