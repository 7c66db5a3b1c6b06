//! HTTP error responses
//!
//! Every failure is answered as `{"detail": "..."}` with a status derived
//! from the domain error kind.

use movies_domain::error::Error;
use rocket::http::Status;
use rocket::response::{self, Responder, status};
use rocket::serde::json::Json;
use rocket::Request;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description
    pub detail: String,
}

/// Error answered by a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Response status
    pub status: Status,
    /// Response detail
    pub detail: String,
}

/// Result type of route handlers
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// 404 with the given detail
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            status: Status::NotFound,
            detail: detail.into(),
        }
    }

    /// 422 with the given detail
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self {
            status: Status::UnprocessableEntity,
            detail: detail.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidArgument { message } => Self::unprocessable(message),
            Error::NotFound { resource } => Self::not_found(resource),
            Error::BackendUnavailable { .. } => {
                warn!(error = %err, "Search backend unavailable");
                Self {
                    status: Status::ServiceUnavailable,
                    detail: "search backend unavailable".to_string(),
                }
            }
            Error::BackendRejected { .. } => {
                warn!(error = %err, "Search backend rejected query");
                Self::unprocessable("search backend rejected the query")
            }
            other => {
                error!(error = %other, "Request failed");
                Self {
                    status: Status::InternalServerError,
                    detail: "internal server error".to_string(),
                }
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let body = Json(ErrorBody {
            detail: self.detail,
        });
        status::Custom(self.status, body).respond_to(request)
    }
}
