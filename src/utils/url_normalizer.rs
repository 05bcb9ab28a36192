//! Destination URL checks.
//!
//! Shortcuts only ever redirect to web pages, so anything that is not an
//! absolute `http`/`https` URL with a host is refused before it is stored.

use url::Url;

/// Errors produced while normalizing a destination.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Parses a destination and returns its canonical serialization.
///
/// The returned string is what gets stored and later sent as the
/// `Location` header. Parsing lowercases the host, drops default ports and
/// percent-encodes anything that is not header-safe. Path, query and
/// fragment are otherwise kept as given.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs,
/// [`UrlNormalizationError::UnsupportedProtocol`] for schemes such as
/// `javascript:`, `data:` or `file:`, and
/// [`UrlNormalizationError::MissingHost`] when there is no host.
///
/// # Examples
///
/// ```
/// use shortcuts::utils::url_normalizer::normalize_destination;
///
/// assert_eq!(
///     normalize_destination("HTTPS://Example.COM:443/Docs").unwrap(),
///     "https://example.com/Docs"
/// );
/// assert!(normalize_destination("javascript:alert(1)").is_err());
/// ```
pub fn normalize_destination(input: &str) -> Result<String, UrlNormalizationError> {
    let url = Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url.as_str().to_string()),
        _ => Err(UrlNormalizationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_root_path() {
        assert_eq!(
            normalize_destination("https://example.com").unwrap(),
            "https://example.com/"
        );
    }

    #[test]
    fn test_normalize_lowercases_host_and_keeps_path_case() {
        assert_eq!(
            normalize_destination("http://EXAMPLE.com/Path?Q=1#Top").unwrap(),
            "http://example.com/Path?Q=1#Top"
        );
    }

    #[test]
    fn test_normalize_drops_default_port() {
        assert_eq!(
            normalize_destination("http://example.com:80/a").unwrap(),
            "http://example.com/a"
        );
        assert_eq!(
            normalize_destination("https://example.com:8443/a").unwrap(),
            "https://example.com:8443/a"
        );
    }

    #[test]
    fn test_normalize_encodes_unsafe_characters() {
        assert_eq!(
            normalize_destination("https://example.com/a b\"c").unwrap(),
            "https://example.com/a%20b%22c"
        );
    }

    #[test]
    fn test_reject_non_web_schemes() {
        for input in [
            "javascript:alert(1)",
            "data:text/html,<script>alert(1)</script>",
            "file:///etc/passwd",
            "ftp://example.com/file",
        ] {
            assert!(
                matches!(
                    normalize_destination(input),
                    Err(UrlNormalizationError::UnsupportedProtocol)
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_reject_malformed() {
        assert!(matches!(
            normalize_destination("not a url"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
        assert!(matches!(
            normalize_destination("http://"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }
}
