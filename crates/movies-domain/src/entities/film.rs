use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Genre reference embedded in a film document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreShort {
    /// Genre identifier
    pub id: Uuid,
    /// Genre name
    pub name: String,
}

/// Person reference embedded in a film document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonShort {
    /// Person identifier
    pub id: Uuid,
    /// Person display name
    pub name: String,
}

/// Entity: Film
///
/// Full film record as stored in the `movies` index. The `*_names` fields are
/// denormalized copies used by full-text search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    /// Film identifier
    pub id: Uuid,
    /// Title
    pub title: String,
    /// Plot description
    #[serde(default)]
    pub description: Option<String>,
    /// IMDb rating
    #[serde(default)]
    pub imdb_rating: Option<f64>,
    /// Genres the film belongs to
    #[serde(default)]
    pub genres: Vec<GenreShort>,
    /// Actors
    #[serde(default)]
    pub actors: Vec<PersonShort>,
    /// Writers
    #[serde(default)]
    pub writers: Vec<PersonShort>,
    /// Directors
    #[serde(default)]
    pub directors: Vec<PersonShort>,
    /// Genre names
    #[serde(default)]
    pub genres_names: Vec<String>,
    /// Actor names
    #[serde(default)]
    pub actors_names: Vec<String>,
    /// Writer names
    #[serde(default)]
    pub writers_names: Vec<String>,
    /// Director names
    #[serde(default)]
    pub directors_names: Vec<String>,
}

/// Short film projection used in listings and person filmographies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmShort {
    /// Film identifier
    pub id: Uuid,
    /// Title
    pub title: String,
    /// IMDb rating
    #[serde(default)]
    pub imdb_rating: Option<f64>,
}

impl From<&Film> for FilmShort {
    fn from(film: &Film) -> Self {
        Self {
            id: film.id,
            title: film.title.clone(),
            imdb_rating: film.imdb_rating,
        }
    }
}

impl From<Film> for FilmShort {
    fn from(film: Film) -> Self {
        Self {
            id: film.id,
            title: film.title,
            imdb_rating: film.imdb_rating,
        }
    }
}
