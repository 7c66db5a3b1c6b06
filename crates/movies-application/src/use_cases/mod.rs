//! Use Cases
//!
//! Entity services. Each holds one search provider (direct or cached) and
//! maps raw documents into typed records.

pub mod film_service;
pub mod genre_service;
pub mod person_service;

pub use film_service::FilmServiceImpl;
pub use genre_service::GenreServiceImpl;
pub use person_service::PersonServiceImpl;
