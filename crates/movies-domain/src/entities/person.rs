use crate::entities::film::FilmShort;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entity: Person
///
/// The `persons` index stores the display name as `full_name`; it is read
/// into [`Person::name`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Person identifier
    pub id: Uuid,
    /// Display name
    #[serde(alias = "full_name")]
    pub name: String,
    /// Films the person acted in
    #[serde(default)]
    pub actor: Vec<FilmShort>,
    /// Films the person wrote
    #[serde(default)]
    pub writer: Vec<FilmShort>,
    /// Films the person directed
    #[serde(default)]
    pub director: Vec<FilmShort>,
}

impl Person {
    /// Every film id referenced by the person, roles concatenated in
    /// actor, writer, director order
    pub fn film_ids(&self) -> Vec<Uuid> {
        self.actor
            .iter()
            .chain(&self.writer)
            .chain(&self.director)
            .map(|film| film.id)
            .collect()
    }
}

/// A person's filmography grouped by role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonFilms {
    /// Films the person acted in
    pub actor: Vec<FilmShort>,
    /// Films the person wrote
    pub writer: Vec<FilmShort>,
    /// Films the person directed
    pub director: Vec<FilmShort>,
}
