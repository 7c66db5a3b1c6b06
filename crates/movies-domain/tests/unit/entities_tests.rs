//! Entity mapping tests

use movies_domain::entities::{Film, FilmShort, Genre, Person, from_document, from_documents};
use serde_json::json;

#[test]
fn test_person_reads_full_name() {
    let person: Person = from_document(json!({
        "id": "b5d2b63a-ed1f-4e46-8320-cf52a32be358",
        "full_name": "Carrie Fisher",
        "actor": [{"id": "3d825f60-9fff-4dfe-b294-1a45fa1e115d", "title": "Star Wars"}]
    }))
    .unwrap();

    assert_eq!(person.name, "Carrie Fisher");
    assert_eq!(person.actor.len(), 1);
    assert!(person.writer.is_empty());
    assert_eq!(person.film_ids().len(), 1);
}

#[test]
fn test_film_optional_fields_default() {
    let film: Film = from_document(json!({
        "id": "3d825f60-9fff-4dfe-b294-1a45fa1e115d",
        "title": "Star Wars",
    }))
    .unwrap();

    assert_eq!(film.imdb_rating, None);
    assert!(film.genres.is_empty());
    assert!(film.actors_names.is_empty());

    let short = FilmShort::from(&film);
    assert_eq!(short.title, "Star Wars");
}

#[test]
fn test_malformed_document_is_internal_error() {
    let err = from_document::<Genre>(json!({"id": "not-a-uuid", "name": "Drama"})).unwrap_err();
    assert!(!err.is_not_found());
    assert!(err.to_string().contains("Malformed document"));
}

#[test]
fn test_from_documents_preserves_order() {
    let genres: Vec<Genre> = from_documents(vec![
        json!({"id": "6c162475-c7ed-4461-9184-001ef3d9f26e", "name": "Action"}),
        json!({"id": "120a21cf-9097-479e-904a-13dd7198c1dd", "name": "Adventure"}),
    ])
    .unwrap();

    let names: Vec<_> = genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Action", "Adventure"]);
}
