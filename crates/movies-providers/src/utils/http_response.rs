//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from search backends.

use movies_domain::error::{Error, Result};
use reqwest::{Response, StatusCode};

/// Format error message for a search backend failure
fn backend_error(provider: &str, context: &str, details: &str) -> Error {
    Error::backend_unavailable(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Map a transport error, distinguishing timeouts
    pub fn transport_error(provider_name: &str, error: reqwest::Error) -> Error {
        let context = if error.is_timeout() {
            "request timed out"
        } else if error.is_connect() {
            "connection failed"
        } else {
            "request failed"
        };
        let message = format!("{provider_name} {context}");
        Error::backend_unavailable_with_source(message, error)
    }

    /// Map a non-success status and its body to a domain error
    ///
    /// Client errors that describe the query itself (400, 422, a window past
    /// the index limit) become [`Error::BackendRejected`]. Authentication,
    /// throttling, missing indices and server errors mean the backend cannot
    /// serve and become [`Error::BackendUnavailable`].
    pub fn status_error(provider_name: &str, status: StatusCode, body: &str) -> Error {
        let code = status.as_u16();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                backend_error(provider_name, "authentication failed", body)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                backend_error(provider_name, "rate limit exceeded", body)
            }
            StatusCode::NOT_FOUND | StatusCode::REQUEST_TIMEOUT => {
                backend_error(provider_name, &format!("request failed ({code})"), body)
            }
            s if s.is_client_error() => {
                Error::backend_rejected(format!("{provider_name} rejected query ({code}): {body}"))
            }
            s if s.is_server_error() => {
                backend_error(provider_name, &format!("server error ({code})"), body)
            }
            _ => backend_error(provider_name, &format!("request failed ({code})"), body),
        }
    }

    /// Check response status and parse JSON
    ///
    /// # Returns
    /// Parsed JSON value on success, or the error from [`Self::status_error`]
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::status_error(provider_name, status, &error_text));
        }

        response
            .json()
            .await
            .map_err(|e| backend_error(provider_name, "response parse failed", &e.to_string()))
    }
}
