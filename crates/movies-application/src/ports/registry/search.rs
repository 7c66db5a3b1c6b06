//! Search Provider Registry
//!
//! Providers register themselves into [`SEARCH_PROVIDERS`] and are looked up
//! by name when the application is assembled.

use std::sync::Arc;

use movies_domain::ports::SearchProvider;

/// Configuration for search provider creation
#[derive(Debug, Clone, Default)]
pub struct SearchProviderConfig {
    /// Provider name (e.g., "elasticsearch", "memory")
    pub provider: String,
    /// Base URL of the search backend
    pub url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl SearchProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the base URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the request timeout in seconds
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

/// Registry entry for search providers
pub struct SearchProviderEntry {
    /// Unique provider name (e.g., "elasticsearch", "memory")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&SearchProviderConfig) -> Result<Arc<dyn SearchProvider>, String>,
}

#[linkme::distributed_slice]
pub static SEARCH_PROVIDERS: [SearchProviderEntry] = [..];

/// Resolve search provider by name from registry
pub fn resolve_search_provider(
    config: &SearchProviderConfig,
) -> Result<Arc<dyn SearchProvider>, String> {
    let provider_name = &config.provider;

    if let Some(entry) = SEARCH_PROVIDERS.iter().find(|e| e.name == provider_name) {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = SEARCH_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown search provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered search providers as `(name, description)` pairs
pub fn list_search_providers() -> Vec<(&'static str, &'static str)> {
    SEARCH_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
