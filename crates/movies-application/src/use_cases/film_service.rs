//! Film Service Use Case

use std::sync::Arc;

use async_trait::async_trait;
use movies_domain::entities::{Film, FilmShort, from_document, from_documents};
use movies_domain::error::Result;
use movies_domain::ports::SearchProvider;
use movies_domain::value_objects::{EntityKind, FilmSort, Page, PageRequest, QueryDescriptor};
use uuid::Uuid;

use crate::domain_services::FilmServiceInterface;
use crate::query_builder;

/// Film service implementation
pub struct FilmServiceImpl {
    search: Arc<dyn SearchProvider>,
}

impl FilmServiceImpl {
    /// Create a film service over `search`
    pub fn new(search: Arc<dyn SearchProvider>) -> Self {
        Self { search }
    }

    async fn page(
        &self,
        descriptor: &QueryDescriptor,
        page: PageRequest,
    ) -> Result<Page<FilmShort>> {
        let envelope = self.search.search(descriptor).await?;
        let films = from_documents(envelope.documents)?;
        Ok(Page::new(page, envelope.total_hits, films))
    }
}

#[async_trait]
impl FilmServiceInterface for FilmServiceImpl {
    async fn list(
        &self,
        sort: FilmSort,
        genre: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Page<FilmShort>> {
        let descriptor = query_builder::film_listing(sort, genre, page);
        self.page(&descriptor, page).await
    }

    async fn search(&self, query: &str, page: PageRequest) -> Result<Page<FilmShort>> {
        let descriptor = query_builder::full_text(EntityKind::Film, query, page);
        self.page(&descriptor, page).await
    }

    async fn retrieve(&self, id: Uuid) -> Result<Option<Film>> {
        self.search
            .get(EntityKind::Film, &id.to_string())
            .await?
            .map(from_document)
            .transpose()
    }
}
