//! Search Provider Port
//!
//! Port for document search backends. The same contract is implemented by the
//! direct backend adapters and by the caching decorator in
//! `movies-application`, so callers never know which one they hold.

use crate::error::Result;
use crate::value_objects::{EntityKind, QueryDescriptor, ResultEnvelope};
use async_trait::async_trait;

/// Search Provider Port
///
/// # Failure semantics
///
/// - An absent document is `Ok(None)`, never an error.
/// - Network faults, timeouts and backend failures are
///   [`Error::BackendUnavailable`](crate::error::Error::BackendUnavailable);
///   they are never reported as an empty result or as not-found.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Exact-id point read against `kind`'s index
    async fn get(&self, kind: EntityKind, id: &str) -> Result<Option<serde_json::Value>>;

    /// Execute `descriptor` verbatim
    ///
    /// The returned envelope carries the total hit count independent of the
    /// window and only the windowed slice of documents.
    async fn search(&self, descriptor: &QueryDescriptor) -> Result<ResultEnvelope>;

    /// Verify the backend is reachable
    async fn health_check(&self) -> Result<()>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
