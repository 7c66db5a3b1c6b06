//! Search Result Value Objects

use serde::{Deserialize, Serialize};

/// Result of executing a [`QueryDescriptor`](super::QueryDescriptor)
///
/// `total_hits` counts every match before windowing; `documents` holds only
/// the windowed slice, in backend relevance or sort order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// Number of matches before windowing
    pub total_hits: u64,
    /// Raw documents inside the window
    pub documents: Vec<serde_json::Value>,
}

impl ResultEnvelope {
    /// Create an envelope
    pub fn new(total_hits: u64, documents: Vec<serde_json::Value>) -> Self {
        Self {
            total_hits,
            documents,
        }
    }

    /// Envelope with no matches
    pub fn empty() -> Self {
        Self::default()
    }
}
