//! Route assembly

pub mod films;
pub mod genres;
pub mod health;
pub mod persons;

use movies_infrastructure::AppContext;
use rocket::{Build, Rocket, routes};

use crate::catchers::catchers;
use crate::constants::{FILMS_MOUNT, GENRES_MOUNT, PERSONS_MOUNT};

/// Build the catalog Rocket instance over an assembled application
///
/// Network settings are left to the caller (`configure`), so tests can
/// drive the same instance through a local client.
pub fn catalog_rocket(context: AppContext) -> Rocket<Build> {
    rocket::build()
        .manage(context)
        .mount(
            FILMS_MOUNT,
            routes![films::list_films, films::search_films, films::retrieve_film],
        )
        .mount(GENRES_MOUNT, routes![genres::list_genres, genres::retrieve_genre])
        .mount(
            PERSONS_MOUNT,
            routes![
                persons::search_persons,
                persons::retrieve_person,
                persons::person_films
            ],
        )
        .mount("/", routes![health::health])
        .register("/", catchers())
}
