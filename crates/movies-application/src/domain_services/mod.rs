//! Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`FilmServiceInterface`] | Film listing, search and retrieval |
//! | [`PersonServiceInterface`] | Person search, retrieval and filmography |
//! | [`GenreServiceInterface`] | Genre listing and retrieval |

pub use crate::ports::services::{
    FilmServiceInterface, GenreServiceInterface, PersonServiceInterface,
};
