//! Query Descriptor Value Objects
//!
//! A [`QueryDescriptor`] is the backend-agnostic description of one search:
//! which index, an optional weighted full-text match, ordered filter
//! predicates, an optional sort and the `(offset, limit)` window. It is built
//! by pure functions and never mutated afterwards, so its serialized form is a
//! stable description of the query's shape.

use crate::constants::{FILM_RATING_FIELD, INDEX_GENRES, INDEX_MOVIES, INDEX_PERSONS};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of catalog entity, each backed by its own index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Films (`movies` index)
    Film,
    /// Persons (`persons` index)
    Person,
    /// Genres (`genres` index)
    Genre,
}

impl EntityKind {
    /// All entity kinds
    pub const ALL: [EntityKind; 3] = [EntityKind::Film, EntityKind::Person, EntityKind::Genre];

    /// Name of the index holding this kind of document
    pub fn index(self) -> &'static str {
        match self {
            Self::Film => INDEX_MOVIES,
            Self::Person => INDEX_PERSONS,
            Self::Genre => INDEX_GENRES,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.index())
    }
}

/// A searched field and its boost weight
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldBoost {
    /// Document field name
    pub field: String,
    /// Relative weight of a match on this field
    pub boost: u32,
}

impl FieldBoost {
    /// Create a field boost
    pub fn new(field: impl Into<String>, boost: u32) -> Self {
        Self {
            field: field.into(),
            boost,
        }
    }
}

/// Weighted multi-field full-text match
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullTextQuery {
    /// Raw query text
    pub text: String,
    /// Searched fields, in order
    pub fields: Vec<FieldBoost>,
    /// Maximum edit distance per term, `None` for exact terms
    pub fuzziness: Option<u8>,
}

/// Filter predicate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Filter {
    /// Field equals value
    Term {
        /// Document field
        field: String,
        /// Expected value
        value: String,
    },
    /// Some element of an embedded collection has `field == value`
    Nested {
        /// Path of the embedded collection
        path: String,
        /// Field inside the collection, fully qualified (`path.field`)
        field: String,
        /// Expected value
        value: String,
    },
    /// Document id is one of `values`
    Ids {
        /// Accepted document ids
        values: Vec<String>,
    },
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    /// Backend spelling of the direction
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Explicit sort on one field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDirective {
    /// Sorted field
    pub field: String,
    /// Direction
    pub direction: SortDirection,
}

impl SortDirective {
    /// Ascending sort on `field`
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `field`
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Film listing order, as accepted in the `sort` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilmSort {
    /// `-imdb_rating`: best rated first
    #[default]
    RatingDescending,
    /// `imdb_rating`: worst rated first
    RatingAscending,
}

impl FilmSort {
    /// Token spelling of the order
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RatingDescending => "-imdb_rating",
            Self::RatingAscending => "imdb_rating",
        }
    }

    /// Sort directive on the rating field
    pub fn directive(self) -> SortDirective {
        match self {
            Self::RatingDescending => SortDirective::descending(FILM_RATING_FIELD),
            Self::RatingAscending => SortDirective::ascending(FILM_RATING_FIELD),
        }
    }
}

impl FromStr for FilmSort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "-imdb_rating" => Ok(Self::RatingDescending),
            "imdb_rating" => Ok(Self::RatingAscending),
            other => Err(Error::invalid_argument(format!(
                "Unsupported sort '{other}'. Expected one of: -imdb_rating, imdb_rating"
            ))),
        }
    }
}

impl fmt::Display for FilmSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(offset, limit)` slice of a ranked or sorted result set
///
/// Invariant: `limit > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    pub(crate) offset: u64,
    pub(crate) limit: u64,
}

impl Window {
    /// Create a window, rejecting an empty limit
    pub fn new(offset: u64, limit: u64) -> Result<Self> {
        if limit == 0 {
            return Err(Error::invalid_argument("window limit must be greater than 0"));
        }
        Ok(Self { offset, limit })
    }

    /// Window starting at the first hit
    pub fn first(limit: u64) -> Result<Self> {
        Self::new(0, limit)
    }

    /// Number of hits skipped
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Maximum number of hits returned
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

/// Structured, backend-agnostic search query
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryDescriptor {
    /// Entity kind, hence index, searched
    pub kind: EntityKind,
    /// Weighted full-text match
    pub full_text: Option<FullTextQuery>,
    /// Filter predicates, all of which must hold
    pub filters: Vec<Filter>,
    /// Explicit sort; `None` keeps backend relevance order
    pub sort: Option<SortDirective>,
    /// Result window
    pub window: Window,
}

impl QueryDescriptor {
    /// Match-all descriptor over `kind` with the given window
    pub fn new(kind: EntityKind, window: Window) -> Self {
        Self {
            kind,
            full_text: None,
            filters: Vec::new(),
            sort: None,
            window,
        }
    }

    /// Attach a full-text match
    #[must_use]
    pub fn with_full_text(mut self, full_text: FullTextQuery) -> Self {
        self.full_text = Some(full_text);
        self
    }

    /// Append a filter predicate
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Attach a sort directive
    #[must_use]
    pub fn with_sort(mut self, sort: SortDirective) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Index searched by this descriptor
    pub fn index(&self) -> &'static str {
        self.kind.index()
    }
}
