//! Response schemas
//!
//! Short records (`FilmShort`, `Genre`, `PersonFilms`) and the `Page`
//! envelope serialize as they are. Full records are reshaped here: films
//! drop their search-only name lists and persons expose film ids per role.

use movies_domain::entities::{Film, FilmShort, GenreShort, Person, PersonShort};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Film details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmLongSchema {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub imdb_rating: Option<f64>,
    pub genres: Vec<GenreShort>,
    pub actors: Vec<PersonShort>,
    pub writers: Vec<PersonShort>,
    pub directors: Vec<PersonShort>,
}

impl From<Film> for FilmLongSchema {
    fn from(film: Film) -> Self {
        Self {
            id: film.id,
            title: film.title,
            description: film.description,
            imdb_rating: film.imdb_rating,
            genres: film.genres,
            actors: film.actors,
            writers: film.writers,
            directors: film.directors,
        }
    }
}

/// Person with the ids of their films per role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSchema {
    pub id: Uuid,
    pub name: String,
    pub actor: Vec<Uuid>,
    pub writer: Vec<Uuid>,
    pub director: Vec<Uuid>,
}

impl From<Person> for PersonSchema {
    fn from(person: Person) -> Self {
        let ids = |films: Vec<FilmShort>| -> Vec<Uuid> {
            films.into_iter().map(|film| film.id).collect()
        };
        Self {
            id: person.id,
            name: person.name,
            actor: ids(person.actor),
            writer: ids(person.writer),
            director: ids(person.director),
        }
    }
}
