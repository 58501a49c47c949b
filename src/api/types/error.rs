//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Wire shape of every failure: a single `error` string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                error: message.into(),
            },
        }
    }

    /// The one client error in the contract: a required field is absent or empty
    pub fn missing_parameters() -> Self {
        Self::bad_request("Missing required parameters")
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::Validation { message } => Self::bad_request(message),
            // Provider, configuration, and internal failures are all terminal
            // server errors carrying the failure's description
            _ => Self::internal(err.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.body.error)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameters_error() {
        let err = ApiError::missing_parameters();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.error, "Missing required parameters");
    }

    #[test]
    fn test_provider_error_maps_to_internal() {
        let domain_err = DomainError::provider("gemini", "API key not valid");
        let api_err: ApiError = domain_err.into();

        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(api_err.body.error.contains("API key not valid"));
        assert!(!api_err.body.error.is_empty());
    }

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let domain_err = DomainError::validation("Missing required parameters");
        let api_err: ApiError = domain_err.into();

        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.body.error, "Missing required parameters");
    }

    #[test]
    fn test_error_serialization_is_flat() {
        let err = ApiError::internal("upstream unreachable");
        let json = serde_json::to_string(&err.body).unwrap();
        assert_eq!(json, r#"{"error":"upstream unreachable"}"#);
    }
}
