//! Provider Constants
//!
//! Constants specific to provider implementations. Query semantics live in
//! `movies_domain::constants`.

// ============================================================================
// ELASTICSEARCH CONSTANTS
// ============================================================================

/// Default Elasticsearch base URL
pub const ELASTICSEARCH_DEFAULT_URL: &str = "http://localhost:9200";

/// Default Elasticsearch request timeout in seconds
pub const ELASTICSEARCH_DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Document field matched by id-membership filters
pub const ELASTICSEARCH_ID_FIELD: &str = "id";

/// Suffix naming the exact-value subfield of a text field
pub const KEYWORD_SUBFIELD: &str = ".keyword";

/// Content type for JSON request bodies
pub const CONTENT_TYPE_JSON: &str = "application/json";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default maximum number of entries in the in-memory cache
pub const CACHE_DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Default Redis connection URI
pub const REDIS_DEFAULT_URI: &str = "redis://localhost:6379";

/// Default Redis operation timeout in seconds
pub const REDIS_DEFAULT_TIMEOUT_SECS: u64 = 2;
