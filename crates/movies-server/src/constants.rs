//! Server constants

/// Mount point of the film routes
pub const FILMS_MOUNT: &str = "/api/v1/films";

/// Mount point of the genre routes
pub const GENRES_MOUNT: &str = "/api/v1/genres";

/// Mount point of the person routes
pub const PERSONS_MOUNT: &str = "/api/v1/persons";

/// Detail returned when a film lookup misses
pub const FILM_NOT_FOUND: &str = "film not found";

/// Detail returned when a person lookup misses
pub const PERSON_NOT_FOUND: &str = "person not found";

/// Detail returned when a genre lookup misses
pub const GENRE_NOT_FOUND: &str = "genre not found";
