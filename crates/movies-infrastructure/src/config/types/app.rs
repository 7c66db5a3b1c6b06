//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{CacheConfig, LoggingConfig, SearchConfig, ServerConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Search backend
    #[serde(default)]
    pub search: SearchConfig,
    /// Cache store and per-kind TTLs
    #[serde(default)]
    pub cache: CacheConfig,
}
