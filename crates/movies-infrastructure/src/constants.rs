//! Infrastructure Constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Environment variable prefix; nested keys are separated by `__`
/// (e.g., `MOVIES__SEARCH__URL`)
pub const CONFIG_ENV_PREFIX: &str = "MOVIES";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "movies.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "movies";

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "MOVIES_LOG";

/// Default rolling log file prefix
pub const LOG_FILE_PREFIX: &str = "movies";

// ============================================================================
// SEARCH CONSTANTS
// ============================================================================

/// Default search provider
pub const DEFAULT_SEARCH_PROVIDER: &str = "elasticsearch";

/// Default search backend URL
pub const DEFAULT_SEARCH_URL: &str = "http://localhost:9200";

/// Default search request timeout in seconds
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default cache provider
pub const DEFAULT_CACHE_PROVIDER: &str = "redis";

/// Default cache URI
pub const DEFAULT_CACHE_URI: &str = "redis://localhost:6379";

/// Default cache key namespace
pub const DEFAULT_CACHE_NAMESPACE: &str = "movies";

/// Default maximum in-memory cache entries
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 10_000;

/// Default cache operation timeout in seconds
pub const DEFAULT_CACHE_TIMEOUT_SECS: u64 = 2;
