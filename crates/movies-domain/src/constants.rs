//! Domain layer constants
//!
//! Contains constants that are part of the catalog's query semantics and are
//! used by the application layer. Infrastructure-specific constants remain in
//! `movies_infrastructure::constants`.

// ============================================================================
// INDEX CONSTANTS
// ============================================================================

/// Index holding film documents
pub const INDEX_MOVIES: &str = "movies";

/// Index holding person documents
pub const INDEX_PERSONS: &str = "persons";

/// Index holding genre documents
pub const INDEX_GENRES: &str = "genres";

// ============================================================================
// FULL-TEXT CONSTANTS
// ============================================================================

/// Maximum edit distance between a query term and a matched value
pub const SEARCH_FUZZINESS: u8 = 2;

/// Film fields searched by full-text queries, with their boost weights
pub const FILM_SEARCH_FIELDS: [(&str, u32); 5] = [
    ("title", 4),
    ("description", 2),
    ("actors_names", 1),
    ("writers_names", 1),
    ("directors_names", 1),
];

/// Person field searched by full-text queries
pub const PERSON_SEARCH_FIELD: &str = "full_name";

// ============================================================================
// FILTER / SORT CONSTANTS
// ============================================================================

/// Film field used for rating sorts
pub const FILM_RATING_FIELD: &str = "imdb_rating";

/// Nested collection holding a film's genres
pub const FILM_GENRES_PATH: &str = "genres";

/// Field inside the genres collection matched by genre filters
pub const FILM_GENRE_ID_FIELD: &str = "genres.id";

/// Genre field searched by full-text queries
pub const GENRE_NAME_FIELD: &str = "name";

/// Genre field used for alphabetical listing
///
/// Sorting needs doc values, so the genres index must map `name` as `text`
/// with a `keyword` subfield (or as `keyword` outright under this path).
pub const GENRE_NAME_SORT_FIELD: &str = "name.keyword";

// ============================================================================
// PAGINATION CONSTANTS
// ============================================================================

/// Default 1-based page number
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Default page size
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Window used when listing every genre
pub const GENRES_LIST_LIMIT: u64 = 1000;

/// Window used when resolving a person's films
pub const PERSON_FILMS_LIMIT: u64 = 10_000;

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default TTL for cached documents and result sets (5 minutes)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
