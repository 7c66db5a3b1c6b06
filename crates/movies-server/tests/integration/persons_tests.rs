//! Person route tests

use rocket::http::Status;
use serde_json::json;

use crate::support::{EMPIRE, FORD, LUCAS, STAR_WARS, UNKNOWN, client, json_body};

#[rocket::async_test]
async fn test_search_persons_tolerates_typos() {
    let client = client().await;

    let response = client.get("/api/v1/persons/search?query=lukas").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let body = json_body(response).await;
    assert_eq!(body["pages_count"], 1);
    assert_eq!(body["results"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["results"][0]["id"], LUCAS);
    assert_eq!(body["results"][0]["name"], "George Lucas");
}

#[rocket::async_test]
async fn test_search_persons_requires_query() {
    let client = client().await;

    let response = client.get("/api/v1/persons/search").dispatch().await;

    assert_eq!(response.status(), Status::UnprocessableEntity);
}

#[rocket::async_test]
async fn test_retrieve_person_exposes_film_ids_per_role() {
    let client = client().await;

    let response = client.get(format!("/api/v1/persons/{LUCAS}")).dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({
            "id": LUCAS,
            "name": "George Lucas",
            "actor": [],
            "writer": [STAR_WARS],
            "director": [STAR_WARS]
        })
    );
}

#[rocket::async_test]
async fn test_person_films_keep_role_order() {
    let client = client().await;

    let response = client
        .get(format!("/api/v1/persons/{FORD}/films"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let body = json_body(response).await;
    let actor: Vec<&str> = body["actor"]
        .as_array()
        .expect("actor films")
        .iter()
        .map(|film| film["id"].as_str().expect("id"))
        .collect();
    assert_eq!(actor, [EMPIRE, STAR_WARS]);
    assert_eq!(body["actor"][0]["imdb_rating"], 8.7);
    assert_eq!(body["writer"], json!([]));
    assert_eq!(body["director"], json!([]));
}

#[rocket::async_test]
async fn test_unknown_person_is_not_found() {
    let client = client().await;

    let person = client.get(format!("/api/v1/persons/{UNKNOWN}")).dispatch().await;
    assert_eq!(person.status(), Status::NotFound);
    assert_eq!(json_body(person).await["detail"], "person not found");

    let films = client
        .get(format!("/api/v1/persons/{UNKNOWN}/films"))
        .dispatch()
        .await;
    assert_eq!(films.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_malformed_person_id_is_unprocessable() {
    let client = client().await;

    let response = client.get("/api/v1/persons/42/films").dispatch().await;

    assert_eq!(response.status(), Status::UnprocessableEntity);
    let detail = json_body(response).await["detail"]
        .as_str()
        .map(str::to_string)
        .expect("detail");
    assert!(detail.contains("person_id"), "{detail}");
}
