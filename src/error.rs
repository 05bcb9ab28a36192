//! Application error type and its HTTP mapping.
//!
//! Every layer returns [`AppError`]. Handlers let it propagate and
//! [`IntoResponse`] turns it into a JSON body:
//!
//! ```json
//! {
//!   "message": "No shortcut with name abc found",
//!   "error": { "code": "not_found", "details": { "name": "abc" } }
//! }
//! ```

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Machine-readable part of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub details: Value,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    error: ErrorInfo,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed create request body.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Request is missing something the core needs (e.g. the bearer token).
    #[error("{message}")]
    BadRequest { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Caller-supplied shortcut name collides with a live shortcut.
    #[error("{message}")]
    NameAlreadyInUse { message: String, details: Value },

    #[error("{message}")]
    Unauthorized { message: String, details: Value },

    /// Storage rejected a write because of a uniqueness or foreign-key constraint.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Random name generation could not find a free name within its budget.
    #[error("{message}")]
    GenerationExhausted { message: String, details: Value },

    /// Any storage failure that is not a constraint violation.
    #[error("{message}")]
    Persistence { message: String, details: Value },

    /// Operation is declared but not available in this build.
    #[error("{message}")]
    Unsupported { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn name_already_in_use(message: impl Into<String>, details: Value) -> Self {
        Self::NameAlreadyInUse {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn generation_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::GenerationExhausted {
            message: message.into(),
            details,
        }
    }

    pub fn persistence(message: impl Into<String>, details: Value) -> Self {
        Self::Persistence {
            message: message.into(),
            details,
        }
    }

    pub fn unsupported(message: impl Into<String>, details: Value) -> Self {
        Self::Unsupported {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is surfaced as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest { .. } | Self::NameAlreadyInUse { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::GenerationExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Unsupported { .. } => StatusCode::NOT_IMPLEMENTED,
            Self::Persistence { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable error code used in response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::BadRequest { .. } => "bad_request",
            Self::NotFound { .. } => "not_found",
            Self::NameAlreadyInUse { .. } => "name_already_in_use",
            Self::Unauthorized { .. } => "unauthorized",
            Self::Conflict { .. } => "conflict",
            Self::GenerationExhausted { .. } => "generation_exhausted",
            Self::Persistence { .. } => "persistence_error",
            Self::Unsupported { .. } => "unsupported",
            Self::Internal { .. } => "internal_error",
        }
    }

    fn into_parts(self) -> (String, Value) {
        match self {
            Self::Validation { message, details }
            | Self::BadRequest { message, details }
            | Self::NotFound { message, details }
            | Self::NameAlreadyInUse { message, details }
            | Self::Unauthorized { message, details }
            | Self::Conflict { message, details }
            | Self::GenerationExhausted { message, details }
            | Self::Persistence { message, details }
            | Self::Unsupported { message, details }
            | Self::Internal { message, details } => (message, details),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        if status.is_server_error() {
            tracing::error!(code, error = %self, "Request failed");
        }

        let (message, details) = self.into_parts();
        let body = ErrorBody {
            message,
            error: ErrorInfo { code, details },
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && (db.is_unique_violation() || db.is_foreign_key_violation())
        {
            return AppError::conflict(
                "Constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "Database error");
        AppError::persistence("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(errors.field_errors()).unwrap_or(Value::Null);
        AppError::validation("Request validation failed", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::not_found("x", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::name_already_in_use("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::bad_request("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::unauthorized("x", json!({})).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::generation_exhausted("x", json!({})).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::persistence("x", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::unsupported("x", json!({})).status_code(),
            StatusCode::NOT_IMPLEMENTED
        );
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("No shortcut with name abc found", json!({}));
        assert_eq!(err.to_string(), "No shortcut with name abc found");
    }

    #[test]
    fn test_unauthorized_response_has_challenge_header() {
        let response = AppError::unauthorized("Unauthorized", json!({})).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_non_database_sqlx_error_is_persistence() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Persistence { .. }));
    }
}
