//! API utilities for frontend-backend communication
//!
//! Base URL resolution and the error type shared by every HTTP client.

use crate::shared::config::config;
use contracts::shared::error::ApiErrorBody;
use thiserror::Error;

/// Get the base URL for API requests, e.g. "/api/v1"
pub fn api_base() -> String {
    config().api.base_url.clone()
}

/// Build a full API URL from a path starting with "/"
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/fnol");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Failure of one backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    #[error("not found")]
    NotFound { message: Option<String> },

    #[error("server error {status}")]
    Server { status: u16, message: Option<String> },

    /// A 2xx response whose body is not the expected JSON
    #[error("invalid response: {0}")]
    Decode(String),

    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Map a non-2xx response to an error, reading the backend envelope when present
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.display_message());
        if status == 404 {
            ApiError::NotFound { message }
        } else {
            ApiError::Server { status, message }
        }
    }

    /// Text for the error banner: the server's own message when it sent one
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(m), ..
            }
            | ApiError::NotFound { message: Some(m) } => m.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("/api/v1", "/fnol"), "/api/v1/fnol");
        assert_eq!(join_url("https://x.ae/api/v1/", "info"), "https://x.ae/api/v1/info");
    }

    #[test]
    fn test_validation_envelope_message_is_used() {
        let body = r#"{
            "status": 400,
            "error": "Bad Request",
            "message": "Validation failed",
            "path": "/api/v1/fnol",
            "fieldErrors": [{"field": "mobileNumber", "message": "Invalid UAE mobile number"}]
        }"#;
        let err = ApiError::from_response(400, body);
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: Some("Validation failed".into())
            }
        );
        assert_eq!(err.user_message("Something went wrong"), "Validation failed");
    }

    #[test]
    fn test_field_error_used_when_message_missing() {
        let body = r#"{"fieldErrors": [{"field": "plateNumber", "message": "must not be blank"}]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(err.user_message("x"), "plateNumber: must not be blank");
    }

    #[test]
    fn test_fallback_when_body_is_not_json() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.user_message("Submission failed"), "Submission failed");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_404_is_not_found() {
        let err = ApiError::from_response(404, "");
        assert!(err.is_not_found());
        assert_eq!(err.user_message("FNOL not found"), "FNOL not found");
    }

    #[test]
    fn test_network_error_uses_fallback() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message("Submission failed"), "Submission failed");
    }
}
