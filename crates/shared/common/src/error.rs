//! Unified error handling for the HTTP layer.
//!
//! Every failure a handler can produce becomes an [`AppError`], which renders
//! as JSON with an `error` field. Details of server-side failures are logged
//! and only echoed to the client in the development environment.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, ExtractionError};
use serde::Serialize;
use thiserror::Error;

use crate::config::Environment;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Authorization header required")]
    MissingAuthorization,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Text-analysis provider
    #[error("{0}")]
    Upstream(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[cfg(feature = "jwt")]
    #[error("Token signing error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[cfg(feature = "http-client")]
    #[error("Text-analysis provider request failed")]
    Http(#[from] reqwest::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingAuthorization => "MISSING_AUTHORIZATION",
            AppError::InvalidToken => "INVALID_TOKEN",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => "TOKEN_ERROR",
            #[cfg(feature = "http-client")]
            AppError::Http(_) => "UPSTREAM_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingAuthorization
            | AppError::InvalidToken
            | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            #[cfg(feature = "http-client")]
            AppError::Http(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            #[cfg(feature = "database")]
            AppError::Database(_) => "A database error occurred".to_string(),
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => "An internal error occurred".to_string(),
            AppError::Internal(_) => "An internal error occurred".to_string(),
            _ => self.to_string(),
        }
    }

    /// Underlying cause of a server-side failure, if any.
    pub fn detail(&self) -> Option<String> {
        match self {
            #[cfg(feature = "database")]
            AppError::Database(e) => Some(e.to_string()),
            #[cfg(feature = "jwt")]
            AppError::Jwt(e) => Some(e.to_string()),
            #[cfg(feature = "http-client")]
            AppError::Http(e) => Some(e.to_string()),
            AppError::Internal(msg) => Some(msg.clone()),
            _ => None,
        }
    }

    /// Build the response body for the given environment.
    fn body(&self, environment: Environment) -> ErrorResponse {
        ErrorResponse {
            error: self.user_message(),
            code: self.code(),
            message: self
                .detail()
                .filter(|_| environment.is_development()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            match self.detail() {
                Some(detail) => tracing::error!(code = self.code(), "{}: {}", self, detail),
                None => tracing::error!(code = self.code(), "{}", self),
            }
        }

        (status, Json(self.body(Environment::current()))).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            e @ DomainError::InvalidAge(_) => AppError::Validation(e.to_string()),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(message.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        AppError::Upstream(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_are_unauthorized() {
        assert_eq!(AppError::MissingAuthorization.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::InvalidCredentials.user_message(),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_conflict_message() {
        assert_eq!(AppError::conflict("User").user_message(), "User already exists");
        assert_eq!(AppError::conflict("User").status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_detail_hidden_in_production() {
        let err = AppError::internal("pool exhausted");
        let body = err.body(Environment::Production);
        assert_eq!(body.error, "An internal error occurred");
        assert!(body.message.is_none());
    }

    #[test]
    fn test_internal_detail_shown_in_development() {
        let err = AppError::internal("pool exhausted");
        let body = err.body(Environment::Development);
        assert_eq!(body.message.as_deref(), Some("pool exhausted"));
    }

    #[test]
    fn test_client_errors_have_no_detail() {
        let body = AppError::validation("Text is required").body(Environment::Development);
        assert_eq!(body.error, "Text is required");
        assert!(body.message.is_none());
    }

    #[test]
    fn test_domain_error_conversion() {
        assert!(matches!(
            AppError::from(DomainError::InvalidAge(-3)),
            AppError::Validation(msg) if msg == "Invalid age"
        ));
        assert!(matches!(
            AppError::from(DomainError::internal("bcrypt failed")),
            AppError::Internal(_)
        ));
    }

    #[test]
    fn test_extraction_error_is_upstream() {
        let err = AppError::from(ExtractionError::NoJson);
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.user_message(), "Response does not contain valid JSON");
    }

    #[tokio::test]
    async fn test_response_body_shape() {
        let response = AppError::not_found("Key not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Key not found");
        assert_eq!(json["code"], "NOT_FOUND");
        assert!(json.get("message").is_none());
    }
}
