//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tenantgate_shared::RoutingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // Authorization errors
    #[error("Origin not allowed")]
    OriginNotAllowed,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Configuration errors
    #[error("Tenant domain is not configured")]
    DomainNotConfigured,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Authorization
            ApiError::OriginNotAllowed => (StatusCode::FORBIDDEN, "ORIGIN_NOT_ALLOWED", self.to_string()),

            // Resources
            ApiError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),

            // Configuration
            ApiError::DomainNotConfigured => (StatusCode::SERVICE_UNAVAILABLE, "DOMAIN_NOT_CONFIGURED", self.to_string()),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<RoutingError> for ApiError {
    fn from(err: RoutingError) -> Self {
        match err {
            RoutingError::MissingDomainConfiguration => {
                tracing::error!("Tenant URL requested but no preview or base domain is configured");
                ApiError::DomainNotConfigured
            }
        }
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
