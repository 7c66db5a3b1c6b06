//! Backend health aggregation
//!
//! The search backend is required: when it fails the service is
//! unavailable. The cache is optional: when it fails lookups fall through to
//! the backend, so the service is only degraded.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::logging::log_health_check;
use movies_domain::error::Result;
use movies_domain::ports::{CacheProvider, SearchProvider};
use serde::{Deserialize, Serialize};

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Every backend answers
    Ok,
    /// The cache is unreachable; requests are served uncached
    Degraded,
    /// The search backend is unreachable
    Unavailable,
}

impl HealthStatus {
    /// Check if the service can answer catalog requests
    pub fn is_operational(&self) -> bool {
        matches!(self, Self::Ok | Self::Degraded)
    }
}

/// Result of probing one backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Provider name
    pub provider: String,
    /// Whether the check succeeded
    pub healthy: bool,
    /// Probe duration in milliseconds
    pub response_time_ms: u64,
    /// Failure description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComponentHealth {
    fn from_check(provider: &str, outcome: Result<()>, elapsed: Duration) -> Self {
        let response_time_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        match outcome {
            Ok(()) => Self {
                provider: provider.to_string(),
                healthy: true,
                response_time_ms,
                error: None,
            },
            Err(e) => Self {
                provider: provider.to_string(),
                healthy: false,
                response_time_ms,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Overall health report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Aggregated status
    pub status: HealthStatus,
    /// Search backend check
    pub search: ComponentHealth,
    /// Cache store check
    pub cache: ComponentHealth,
}

/// Probe both backends and aggregate their status
pub async fn check_health(
    search: &Arc<dyn SearchProvider>,
    cache: &Arc<dyn CacheProvider>,
) -> HealthReport {
    let started = Instant::now();
    let outcome = search.health_check().await;
    let search = ComponentHealth::from_check(search.provider_name(), outcome, started.elapsed());
    log_health_check("search", search.healthy, search.error.as_deref());

    let started = Instant::now();
    let outcome = cache.health_check().await;
    let cache = ComponentHealth::from_check(cache.provider_name(), outcome, started.elapsed());
    log_health_check("cache", cache.healthy, cache.error.as_deref());

    let status = match (search.healthy, cache.healthy) {
        (false, _) => HealthStatus::Unavailable,
        (true, false) => HealthStatus::Degraded,
        (true, true) => HealthStatus::Ok,
    };

    HealthReport {
        status,
        search,
        cache,
    }
}
