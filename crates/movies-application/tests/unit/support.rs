//! Test doubles shared by the application tests

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use movies_domain::error::{Error, Result};
use movies_domain::ports::{CacheEntryConfig, CacheProvider, SearchProvider};
use movies_domain::value_objects::{EntityKind, QueryDescriptor, ResultEnvelope};
use movies_providers::search::InMemorySearchProvider;
use serde_json::{Value, json};

/// Search backend that can be switched off and counts calls
pub struct FlakySearch {
    pub inner: InMemorySearchProvider,
    pub down: AtomicBool,
    pub calls: AtomicUsize,
}

impl FlakySearch {
    pub fn new(inner: InMemorySearchProvider) -> Arc<Self> {
        Arc::new(Self {
            inner,
            down: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn fail(&self) {
        self.down.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.down.load(Ordering::SeqCst) {
            return Err(Error::backend_unavailable("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl SearchProvider for FlakySearch {
    async fn get(&self, kind: EntityKind, id: &str) -> Result<Option<Value>> {
        self.check()?;
        self.inner.get(kind, id).await
    }

    async fn search(&self, descriptor: &QueryDescriptor) -> Result<ResultEnvelope> {
        self.check()?;
        self.inner.search(descriptor).await
    }

    async fn health_check(&self) -> Result<()> {
        self.check()
    }

    fn provider_name(&self) -> &str {
        "flaky"
    }
}

/// Which cache operations fail
#[derive(Debug, Clone, Copy)]
pub enum CacheFault {
    Reads,
    Writes,
}

/// Cache store whose reads or writes always fail
#[derive(Debug)]
pub struct BrokenCache {
    pub fault: CacheFault,
}

#[async_trait]
impl CacheProvider for BrokenCache {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        match self.fault {
            CacheFault::Reads => Err(Error::cache("connection reset")),
            CacheFault::Writes => Ok(None),
        }
    }

    async fn set_json(&self, _key: &str, _value: &str, _config: CacheEntryConfig) -> Result<()> {
        match self.fault {
            CacheFault::Reads => Ok(()),
            CacheFault::Writes => Err(Error::cache("connection reset")),
        }
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    async fn size(&self) -> Result<usize> {
        Err(Error::cache("connection reset"))
    }

    fn provider_name(&self) -> &str {
        "broken"
    }
}

pub const ACTION: &str = "6c162475-c7ed-4461-9184-001ef3d9f26e";
pub const DRAMA: &str = "120a21cf-9097-479e-904a-13dd7198c1dd";

pub const FILM_A: &str = "3d825f60-9fff-4dfe-b294-1a45fa1e115d";
pub const FILM_B: &str = "0312ed51-8833-413f-bff5-0e139c11264a";
pub const FILM_C: &str = "025c58cd-1b7e-43be-9ffb-8571a613579b";

pub const LUCAS: &str = "a5a8f573-3cee-4ccc-8a2b-91cb9f55250a";

/// Three rated films, a few genres and one person
pub fn catalog() -> InMemorySearchProvider {
    let provider = InMemorySearchProvider::new();
    provider.insert_many(
        EntityKind::Film,
        vec![
            json!({
                "id": FILM_A, "title": "Star Wars", "imdb_rating": 9.4,
                "description": "Rebels against the empire",
                "genres": [{"id": ACTION, "name": "Action"}],
                "directors": [{"id": LUCAS, "name": "George Lucas"}],
                "directors_names": ["George Lucas"]
            }),
            json!({
                "id": FILM_B, "title": "The Expanse", "imdb_rating": 9.5,
                "genres": [{"id": DRAMA, "name": "Drama"}]
            }),
            json!({
                "id": FILM_C, "title": "Empire Strikes Back", "imdb_rating": 9.3,
                "genres": [{"id": ACTION, "name": "Action"}, {"id": DRAMA, "name": "Drama"}],
                "writers_names": ["George Lucas"]
            }),
        ],
    );
    provider.insert_many(
        EntityKind::Genre,
        vec![
            json!({"id": DRAMA, "name": "Drama"}),
            json!({"id": ACTION, "name": "Action"}),
        ],
    );
    provider.insert(
        EntityKind::Person,
        json!({
            "id": LUCAS,
            "full_name": "George Lucas",
            "writer": [{"id": FILM_C, "title": "Empire Strikes Back"}],
            "director": [
                {"id": FILM_A, "title": "Star Wars"},
                {"id": "ffffffff-ffff-4fff-bfff-ffffffffffff", "title": "Unreleased"}
            ]
        }),
    );
    provider
}
