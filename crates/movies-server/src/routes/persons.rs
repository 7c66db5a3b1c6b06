//! Person routes

use movies_domain::entities::PersonFilms;
use movies_domain::value_objects::Page;
use movies_infrastructure::AppContext;
use rocket::serde::json::Json;
use rocket::{State, get};

use crate::constants::PERSON_NOT_FOUND;
use crate::error::{ApiError, ApiResult};
use crate::params::{PageParams, parse_uuid, require_query};
use crate::schemas::PersonSchema;

/// Full-text search over full names
#[get("/search?<query>&<page>")]
pub async fn search_persons(
    context: &State<AppContext>,
    query: Option<&str>,
    page: PageParams,
) -> ApiResult<Json<Page<PersonSchema>>> {
    let query = require_query(query)?;
    let page = page.to_request()?;

    let persons = context.persons().search(query, page).await?;
    Ok(Json(persons.map(PersonSchema::from)))
}

#[get("/<person_id>")]
pub async fn retrieve_person(
    context: &State<AppContext>,
    person_id: &str,
) -> ApiResult<Json<PersonSchema>> {
    let id = parse_uuid("person_id", person_id)?;

    match context.persons().retrieve(id).await? {
        Some(person) => Ok(Json(person.into())),
        None => Err(ApiError::not_found(PERSON_NOT_FOUND)),
    }
}

/// The person's films grouped by role
#[get("/<person_id>/films")]
pub async fn person_films(
    context: &State<AppContext>,
    person_id: &str,
) -> ApiResult<Json<PersonFilms>> {
    let id = parse_uuid("person_id", person_id)?;

    match context.persons().films(id).await? {
        Some(films) => Ok(Json(films)),
        None => Err(ApiError::not_found(PERSON_NOT_FOUND)),
    }
}
