//! Tests for the domain error to HTTP status mapping

use movies_domain::error::Error;
use movies_server::error::ApiError;
use rocket::http::Status;

#[test]
fn test_invalid_argument_is_unprocessable() {
    let err = ApiError::from(Error::invalid_argument("page size must be at least 1"));

    assert_eq!(err.status, Status::UnprocessableEntity);
    assert_eq!(err.detail, "page size must be at least 1");
}

#[test]
fn test_not_found_is_404() {
    let err = ApiError::from(Error::not_found("film 42"));

    assert_eq!(err.status, Status::NotFound);
    assert_eq!(err.detail, "film 42");
}

#[test]
fn test_backend_unavailable_is_503_without_internals() {
    let err = ApiError::from(Error::backend_unavailable("connect to 10.0.0.3:9200 refused"));

    assert_eq!(err.status, Status::ServiceUnavailable);
    assert!(!err.detail.contains("10.0.0.3"));
}

#[test]
fn test_backend_rejection_is_unprocessable_without_internals() {
    let err = ApiError::from(Error::backend_rejected(
        "Elasticsearch rejected query (400): Result window is too large",
    ));

    assert_eq!(err.status, Status::UnprocessableEntity);
    assert_eq!(err.detail, "search backend rejected the query");
}

#[test]
fn test_other_errors_are_500() {
    for source in [
        Error::internal("Malformed document in search backend"),
        Error::cache("connection reset"),
        Error::config("bad"),
    ] {
        let err = ApiError::from(source);
        assert_eq!(err.status, Status::InternalServerError);
        assert_eq!(err.detail, "internal server error");
    }
}
