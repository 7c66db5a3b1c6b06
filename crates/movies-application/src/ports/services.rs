//! Entity Service Port Interfaces
//!
//! Contracts consumed by the HTTP layer. Absence of a single entity is an
//! `Ok(None)`; turning it into a 404 is the caller's concern.

use async_trait::async_trait;
use movies_domain::entities::{Film, FilmShort, Genre, Person, PersonFilms};
use movies_domain::error::Result;
use movies_domain::value_objects::{FilmSort, Page, PageRequest};
use uuid::Uuid;

// ============================================================================
// Film Service Interface
// ============================================================================

/// Film Service Interface
#[async_trait]
pub trait FilmServiceInterface: Send + Sync {
    /// List films, optionally restricted to one genre, in rating order
    async fn list(
        &self,
        sort: FilmSort,
        genre: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Page<FilmShort>>;

    /// Full-text search over titles, descriptions and people names
    async fn search(&self, query: &str, page: PageRequest) -> Result<Page<FilmShort>>;

    /// Full film record by id
    async fn retrieve(&self, id: Uuid) -> Result<Option<Film>>;
}

// ============================================================================
// Person Service Interface
// ============================================================================

/// Person Service Interface
#[async_trait]
pub trait PersonServiceInterface: Send + Sync {
    /// Full-text search over person names
    async fn search(&self, query: &str, page: PageRequest) -> Result<Page<Person>>;

    /// Person record by id
    async fn retrieve(&self, id: Uuid) -> Result<Option<Person>>;

    /// Films of a person grouped by role; `None` when the person is unknown
    async fn films(&self, id: Uuid) -> Result<Option<PersonFilms>>;
}

// ============================================================================
// Genre Service Interface
// ============================================================================

/// Genre Service Interface
#[async_trait]
pub trait GenreServiceInterface: Send + Sync {
    /// Every genre, alphabetically
    async fn list(&self) -> Result<Vec<Genre>>;

    /// Genre record by id
    async fn retrieve(&self, id: Uuid) -> Result<Option<Genre>>;
}
