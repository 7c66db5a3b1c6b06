//! Person Service Use Case
//!
//! Person documents embed short film references per role. The filmography
//! endpoint re-reads those films from the films index in a single ids query
//! so ratings are current.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use movies_domain::entities::{FilmShort, Person, PersonFilms, from_document, from_documents};
use movies_domain::error::Result;
use movies_domain::ports::SearchProvider;
use movies_domain::value_objects::{EntityKind, Page, PageRequest};
use tracing::debug;
use uuid::Uuid;

use crate::domain_services::PersonServiceInterface;
use crate::query_builder;

/// Person service implementation
pub struct PersonServiceImpl {
    search: Arc<dyn SearchProvider>,
}

impl PersonServiceImpl {
    /// Create a person service over `search`
    pub fn new(search: Arc<dyn SearchProvider>) -> Self {
        Self { search }
    }
}

/// Resolve role references against the fetched films, skipping unknown ids
fn resolve_role(refs: &[FilmShort], films: &HashMap<Uuid, FilmShort>) -> Vec<FilmShort> {
    refs.iter()
        .filter_map(|film| {
            let found = films.get(&film.id).cloned();
            if found.is_none() {
                debug!(film_id = %film.id, "Person references a film missing from the index");
            }
            found
        })
        .collect()
}

#[async_trait]
impl PersonServiceInterface for PersonServiceImpl {
    async fn search(&self, query: &str, page: PageRequest) -> Result<Page<Person>> {
        let descriptor = query_builder::full_text(EntityKind::Person, query, page);
        let envelope = self.search.search(&descriptor).await?;
        let persons = from_documents(envelope.documents)?;
        Ok(Page::new(page, envelope.total_hits, persons))
    }

    async fn retrieve(&self, id: Uuid) -> Result<Option<Person>> {
        self.search
            .get(EntityKind::Person, &id.to_string())
            .await?
            .map(from_document)
            .transpose()
    }

    async fn films(&self, id: Uuid) -> Result<Option<PersonFilms>> {
        let Some(person) = self.retrieve(id).await? else {
            return Ok(None);
        };

        let ids = person.film_ids();
        if ids.is_empty() {
            return Ok(Some(PersonFilms::default()));
        }

        let descriptor = query_builder::films_by_ids(&ids)?;
        let envelope = self.search.search(&descriptor).await?;
        let films: HashMap<Uuid, FilmShort> = from_documents::<FilmShort>(envelope.documents)?
            .into_iter()
            .map(|film| (film.id, film))
            .collect();

        Ok(Some(PersonFilms {
            actor: resolve_role(&person.actor, &films),
            writer: resolve_role(&person.writer, &films),
            director: resolve_role(&person.director, &films),
        }))
    }
}
