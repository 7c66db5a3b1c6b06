//! Genre Service Use Case

use std::sync::Arc;

use async_trait::async_trait;
use movies_domain::entities::{Genre, from_document, from_documents};
use movies_domain::error::Result;
use movies_domain::ports::SearchProvider;
use movies_domain::value_objects::EntityKind;
use uuid::Uuid;

use crate::domain_services::GenreServiceInterface;
use crate::query_builder;

/// Genre service implementation
pub struct GenreServiceImpl {
    search: Arc<dyn SearchProvider>,
}

impl GenreServiceImpl {
    /// Create a genre service over `search`
    pub fn new(search: Arc<dyn SearchProvider>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl GenreServiceInterface for GenreServiceImpl {
    async fn list(&self) -> Result<Vec<Genre>> {
        let descriptor = query_builder::genre_listing()?;
        let envelope = self.search.search(&descriptor).await?;
        from_documents(envelope.documents)
    }

    async fn retrieve(&self, id: Uuid) -> Result<Option<Genre>> {
        self.search
            .get(EntityKind::Genre, &id.to_string())
            .await?
            .map(from_document)
            .transpose()
    }
}
