//! Query parameter parsing
//!
//! Parameters are taken as raw strings and validated here, so malformed
//! values produce a 422 with a precise detail instead of a route mismatch.

use std::str::FromStr;

use movies_domain::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use movies_domain::value_objects::{FilmSort, PageRequest};
use rocket::FromForm;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// `page[number]` and `page[size]`
#[derive(Debug, Default, Clone, FromForm)]
pub struct PageParams {
    /// 1-based page number
    pub number: Option<String>,
    /// Page size
    pub size: Option<String>,
}

impl PageParams {
    /// Validated page request; absent values take the defaults
    pub fn to_request(&self) -> ApiResult<PageRequest> {
        let number = parse_positive("page[number]", self.number.as_deref(), DEFAULT_PAGE_NUMBER)?;
        let size = parse_positive("page[size]", self.size.as_deref(), DEFAULT_PAGE_SIZE)?;
        Ok(PageRequest::new(number, size)?)
    }
}

/// `filter[genre]`
#[derive(Debug, Default, Clone, FromForm)]
pub struct FilterParams {
    /// Genre id films must belong to
    pub genre: Option<String>,
}

impl FilterParams {
    /// Validated genre id
    pub fn genre_id(&self) -> ApiResult<Option<Uuid>> {
        self.genre
            .as_deref()
            .map(|raw| parse_uuid("filter[genre]", raw))
            .transpose()
    }
}

/// Validated film sort; absent means the default rating-descending order
pub fn parse_sort(raw: Option<&str>) -> ApiResult<FilmSort> {
    match raw {
        Some(token) => Ok(FilmSort::from_str(token)?),
        None => Ok(FilmSort::default()),
    }
}

/// Required, non-blank full-text query
pub fn require_query(raw: Option<&str>) -> ApiResult<&str> {
    match raw.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ApiError::unprocessable("query parameter 'query' is required")),
    }
}

/// Path or query id
pub fn parse_uuid(name: &str, raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| ApiError::unprocessable(format!("{name} must be a valid UUID, got '{raw}'")))
}

fn parse_positive(name: &str, raw: Option<&str>, default: u64) -> ApiResult<u64> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ApiError::unprocessable(format!(
            "{name} must be an integer greater than or equal to 1, got '{raw}'"
        ))),
    }
}
