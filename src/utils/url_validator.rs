//! Validation of target URLs.
//!
//! A target must be an absolute `http` or `https` URL with a host, since it is
//! handed back to browsers as a redirect `Location`.

use url::Url;

/// Longest target URL accepted.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("URL is longer than {} characters", MAX_URL_LENGTH)]
    TooLong,
}

/// Parses and checks a target URL.
///
/// The caller keeps storing its own (trimmed) input; the parsed [`Url`] is
/// returned so the host can be inspected.
///
/// # Security
///
/// Rejects `javascript:`, `data:`, `file:` and every other non-HTTP scheme.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
/// Returns [`UrlValidationError::MissingHost`] if no host is present.
/// Returns [`UrlValidationError::TooLong`] past [`MAX_URL_LENGTH`] bytes.
pub fn parse_target_url(input: &str) -> Result<Url, UrlValidationError> {
    if input.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    // The raw input becomes a Location header; the parser would silently drop these.
    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat(
            "URL contains control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}
