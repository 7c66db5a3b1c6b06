//! Configuration
//!
//! Sources are merged in order, later ones winning:
//!
//! 1. [`AppConfig::default()`]
//! 2. A TOML file: an explicit path, or the first `movies.toml` found in the
//!    working directory, `./movies/`, or the user config directory
//! 3. Environment variables prefixed `MOVIES__`, nested with `__`
//!    (e.g., `MOVIES__CACHE__FILMS_TTL_SECS=60`)

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, CacheConfig, LoggingConfig, SearchConfig, ServerConfig};
