//! Film routes

use movies_domain::entities::FilmShort;
use movies_domain::value_objects::Page;
use movies_infrastructure::AppContext;
use rocket::serde::json::Json;
use rocket::{State, get};

use crate::constants::FILM_NOT_FOUND;
use crate::error::{ApiError, ApiResult};
use crate::params::{FilterParams, PageParams, parse_sort, parse_uuid, require_query};
use crate::schemas::FilmLongSchema;

/// Films sorted by rating, optionally restricted to one genre
#[get("/?<sort>&<page>&<filter>")]
pub async fn list_films(
    context: &State<AppContext>,
    sort: Option<&str>,
    page: PageParams,
    filter: FilterParams,
) -> ApiResult<Json<Page<FilmShort>>> {
    let sort = parse_sort(sort)?;
    let genre = filter.genre_id()?;
    let page = page.to_request()?;

    let films = context.films().list(sort, genre, page).await?;
    Ok(Json(films))
}

/// Full-text search over titles, descriptions and participant names
#[get("/search?<query>&<page>")]
pub async fn search_films(
    context: &State<AppContext>,
    query: Option<&str>,
    page: PageParams,
) -> ApiResult<Json<Page<FilmShort>>> {
    let query = require_query(query)?;
    let page = page.to_request()?;

    let films = context.films().search(query, page).await?;
    Ok(Json(films))
}

/// Film details
#[get("/<film_id>")]
pub async fn retrieve_film(
    context: &State<AppContext>,
    film_id: &str,
) -> ApiResult<Json<FilmLongSchema>> {
    let id = parse_uuid("film_id", film_id)?;

    match context.films().retrieve(id).await? {
        Some(film) => Ok(Json(film.into())),
        None => Err(ApiError::not_found(FILM_NOT_FOUND)),
    }
}
