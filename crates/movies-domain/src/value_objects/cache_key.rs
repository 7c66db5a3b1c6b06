//! Cache Key Derivation
//!
//! Keys are pure functions of what was asked: the entity kind plus either a
//! document id or the full query descriptor. Descriptors are normalized to
//! their canonical JSON form (declaration-ordered fields, predicate order
//! preserved) and hashed with SHA-256, which keeps keys short no matter how
//! many filters a query carries.

use crate::error::Result;
use crate::value_objects::query::{EntityKind, QueryDescriptor};
use sha2::{Digest, Sha256};
use std::fmt;

/// Cache key namespace separator
pub const CACHE_KEY_SEPARATOR: &str = ":";

/// Deterministic cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for a point lookup of `id` in `kind`'s index
    pub fn document(namespace: &str, kind: EntityKind, id: &str) -> Self {
        Self(join(&[namespace, kind.index(), "doc", id]))
    }

    /// Key for the result set of `descriptor`
    pub fn search(namespace: &str, descriptor: &QueryDescriptor) -> Result<Self> {
        let digest = Sha256::digest(normalize(descriptor)?);
        let hash = format!("{digest:x}");
        Ok(Self(join(&[
            namespace,
            descriptor.kind.index(),
            "search",
            &hash,
        ])))
    }

    /// Key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonical serialization of a descriptor
pub fn normalize(descriptor: &QueryDescriptor) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(descriptor)?)
}

fn join(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(CACHE_KEY_SEPARATOR)
}
