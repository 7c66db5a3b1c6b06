//! Search backend configuration types

use crate::constants::{
    DEFAULT_SEARCH_PROVIDER, DEFAULT_SEARCH_TIMEOUT_SECS, DEFAULT_SEARCH_URL,
};
use movies_application::ports::registry::SearchProviderConfig;
use serde::{Deserialize, Serialize};

/// Search backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Registered provider name ("elasticsearch", "memory")
    pub provider: String,
    /// Backend URL; for the memory provider, an optional fixture path
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_SEARCH_PROVIDER.to_string(),
            url: DEFAULT_SEARCH_URL.to_string(),
            timeout_secs: DEFAULT_SEARCH_TIMEOUT_SECS,
        }
    }
}

impl From<&SearchConfig> for SearchProviderConfig {
    fn from(config: &SearchConfig) -> Self {
        let provider = SearchProviderConfig::new(&config.provider)
            .with_timeout_secs(config.timeout_secs);
        if config.url.is_empty() {
            provider
        } else {
            provider.with_url(&config.url)
        }
    }
}
