//! Genre routes

use movies_domain::entities::Genre;
use movies_infrastructure::AppContext;
use rocket::serde::json::Json;
use rocket::{State, get};

use crate::constants::GENRE_NOT_FOUND;
use crate::error::{ApiError, ApiResult};
use crate::params::parse_uuid;

/// Every genre, alphabetically
#[get("/")]
pub async fn list_genres(context: &State<AppContext>) -> ApiResult<Json<Vec<Genre>>> {
    Ok(Json(context.genres().list().await?))
}

#[get("/<genre_id>")]
pub async fn retrieve_genre(
    context: &State<AppContext>,
    genre_id: &str,
) -> ApiResult<Json<Genre>> {
    let id = parse_uuid("genre_id", genre_id)?;

    context
        .genres()
        .retrieve(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(GENRE_NOT_FOUND))
}
