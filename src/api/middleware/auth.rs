//! Bearer edit-key extraction.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_auth::AuthBearer;
use serde_json::json;

use crate::error::AppError;

/// Edit key presented as a bearer token.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <key>
/// ```
///
/// Only extraction happens here. Whether the key belongs to the shortcut in
/// the path is decided by
/// [`ShortcutService::is_authorized_by_token`](crate::application::services::ShortcutService::is_authorized_by_token).
///
/// # Errors
///
/// Rejects with `400 Bad Request` if the header is missing, is not a bearer
/// token, or carries an empty token.
#[derive(Debug, Clone)]
pub struct ShortcutKey(pub String);

impl<S> FromRequestParts<S> for ShortcutKey
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthBearer(token) = AuthBearer::from_request_parts(parts, state)
            .await
            .map_err(|_| missing_token())?;

        let token = token.trim();
        if token.is_empty() {
            return Err(missing_token());
        }

        Ok(Self(token.to_string()))
    }
}

fn missing_token() -> AppError {
    AppError::bad_request(
        "Missing authentication token",
        json!({ "reason": "Authorization header is missing or invalid" }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, header};

    async fn extract(authorization: Option<&str>) -> Result<ShortcutKey, AppError> {
        let mut builder = Request::builder().uri("/api/shortcuts/abc");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();

        ShortcutKey::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_bearer_token() {
        let key = extract(Some("Bearer AbCdEf0123456789xy")).await.unwrap();
        assert_eq!(key.0, "AbCdEf0123456789xy");
    }

    #[tokio::test]
    async fn test_missing_header_is_bad_request() {
        let err = extract(None).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_bad_request() {
        let err = extract(Some("Basic dXNlcjpwYXNz")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }
}
