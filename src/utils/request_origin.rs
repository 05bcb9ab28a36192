//! Public origin (protocol and host) extraction from HTTP request headers.
//!
//! Create responses carry two URLs built from the origin the client used.
//! They are presentation only and never persisted.

use crate::AppError;
use crate::domain::entities::ShortcutToken;
use axum::http::{HeaderMap, header};
use serde_json::json;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Protocol and host a request was addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub protocol: String,
    pub host: String,
}

impl RequestOrigin {
    /// Public redirect URL: `{protocol}://{host}/{name}`.
    pub fn shortcut_url(&self, name: &str) -> String {
        format!("{}://{}/{}", self.protocol, self.host, name)
    }

    /// Edit URL carrying the key: `{protocol}://{host}/edit/{name}?key={token}`.
    pub fn edit_url(&self, token: &ShortcutToken) -> String {
        format!(
            "{}://{}/edit/{}?key={}",
            self.protocol,
            self.host,
            token.shortcut_name(),
            token.value()
        )
    }
}

/// Extracts the request origin from HTTP headers.
///
/// The host is taken verbatim from the `Host` header, port included. The
/// protocol is `http` unless `behind_proxy` is set and the proxy supplied
/// `X-Forwarded-Proto` (first value wins for chained proxies).
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if:
/// - The `Host` header is missing or empty
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "s.example.com".parse().unwrap());
///
/// let origin = extract_origin(&headers, false).unwrap();
/// assert_eq!(origin.shortcut_url("abc123"), "http://s.example.com/abc123");
/// ```
pub fn extract_origin(headers: &HeaderMap, behind_proxy: bool) -> Result<RequestOrigin, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
        .trim();

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header", json!({})));
    }

    let protocol = if behind_proxy {
        headers
            .get(FORWARDED_PROTO)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| v == "http" || v == "https")
            .unwrap_or_else(|| "http".to_string())
    } else {
        "http".to_string()
    };

    Ok(RequestOrigin {
        protocol,
        host: host.to_string(),
    })
}
