//! DTOs for the shortcut creation endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Characters allowed in a caller-chosen name. Keeps names path-safe.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").unwrap_or_else(|e| panic!("invalid name regex: {e}"))
});

/// First path segments already taken by routes.
const RESERVED_NAMES: &[&str] = &["api", "edit", "health"];

/// Request to create a shortcut.
///
/// ```json
/// { "destination": "https://example.com", "name": "docs" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortcutRequest {
    /// Where the shortcut redirects to.
    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 2048, message = "Destination is too long"))]
    pub destination: String,

    /// Optional caller-chosen name. A random one is generated when absent.
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(
        path = *NAME_REGEX,
        message = "Name may only contain letters, digits, '-' and '_'"
    ))]
    #[validate(custom(function = validate_not_reserved))]
    pub name: Option<String>,
}

fn validate_not_reserved(name: &str) -> Result<(), ValidationError> {
    if RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
    {
        return Err(ValidationError::new("reserved")
            .with_message(Cow::Owned(format!("'{name}' is a reserved name"))));
    }

    Ok(())
}

/// Successful creation response.
///
/// ```json
/// {
///   "message": "Created shortcut with name docs",
///   "data": {
///     "shortcut": "docs",
///     "edit": "http://s.example.com/edit/docs?key=AbCdEf0123456789xy",
///     "URL": "http://s.example.com/docs"
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct CreateShortcutResponse {
    pub message: String,
    pub data: CreatedShortcut,
}

#[derive(Debug, Serialize)]
pub struct CreatedShortcut {
    pub shortcut: String,
    /// Edit URL carrying the shortcut's key.
    pub edit: String,
    #[serde(rename = "URL")]
    pub url: String,
}
