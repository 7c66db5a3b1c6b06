//! # Movies Catalog Server
//!
//! Rocket HTTP surface of the catalog.
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /api/v1/films` | Films sorted by rating, optionally filtered by genre |
//! | `GET /api/v1/films/search?query=` | Full-text film search |
//! | `GET /api/v1/films/<id>` | Film details |
//! | `GET /api/v1/genres` | Every genre, alphabetically |
//! | `GET /api/v1/genres/<id>` | Genre details |
//! | `GET /api/v1/persons/search?query=` | Full-text person search |
//! | `GET /api/v1/persons/<id>` | Person with film ids per role |
//! | `GET /api/v1/persons/<id>/films` | Person's films per role |
//! | `GET /health` | Search and cache backend status |
//!
//! Paginated routes take `page[number]` and `page[size]` (both ≥ 1) and
//! answer `{pages_count, page_number, results}`. Failures answer
//! `{"detail": "..."}`: 422 for invalid input, 404 for unknown ids, 503 when
//! the search backend is down.

pub mod catchers;
pub mod constants;
pub mod error;
pub mod init;
pub mod params;
pub mod routes;
pub mod schemas;

pub use init::run;
pub use routes::catalog_rocket;
