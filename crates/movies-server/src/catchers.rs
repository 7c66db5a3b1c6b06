//! Fallback error responses
//!
//! Cover requests rejected before a handler runs, keeping the
//! `{"detail": ...}` shape of handler errors.

use rocket::serde::json::Json;
use rocket::{Catcher, Request, catch, catchers};

use crate::error::ErrorBody;

#[catch(404)]
fn not_found(_request: &Request<'_>) -> Json<ErrorBody> {
    detail("Not Found")
}

#[catch(422)]
fn unprocessable(_request: &Request<'_>) -> Json<ErrorBody> {
    detail("Unprocessable Entity")
}

#[catch(500)]
fn internal(_request: &Request<'_>) -> Json<ErrorBody> {
    detail("internal server error")
}

fn detail(text: &str) -> Json<ErrorBody> {
    Json(ErrorBody {
        detail: text.to_string(),
    })
}

/// Catchers registered at the root
pub fn catchers() -> Vec<Catcher> {
    catchers![not_found, unprocessable, internal]
}
