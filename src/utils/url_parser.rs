//! Structural URL validation.
//!
//! Checks that a candidate string is an absolute HTTP(S) URL with a host. The
//! candidate itself is never rewritten: mappings store the URL exactly as it
//! was submitted, and only the host is normalized for the DNS check.

use url::{Host, Url};

/// Maximum accepted length of a candidate URL, in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur while validating a candidate URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("URL exceeds maximum length of {MAX_URL_LENGTH} characters")]
    TooLong,

    #[error("Invalid URL format: {0}")]
    Malformed(String),

    #[error("Only HTTP and HTTPS protocols are allowed, got '{0}'")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("Host '{0}' does not resolve")]
    Unresolvable(String),

    #[error("DNS lookup for '{host}' timed out after {timeout_ms}ms")]
    Timeout { host: String, timeout_ms: u64 },
}

/// A candidate URL that passed structural validation.
#[derive(Debug, Clone)]
pub struct ParsedUrl {
    original: String,
    host: Host<String>,
}

impl ParsedUrl {
    /// The candidate as submitted; this is the value that gets persisted.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Returns the domain to resolve, or `None` for IP literals.
    pub fn lookup_domain(&self) -> Option<&str> {
        match &self.host {
            Host::Domain(domain) => Some(domain),
            Host::Ipv4(_) | Host::Ipv6(_) => None,
        }
    }
}

/// Parses a candidate URL without touching the network.
///
/// # Rules
///
/// 1. Must be non-empty and at most [`MAX_URL_LENGTH`] bytes
/// 2. Must not contain ASCII control characters
/// 3. Must parse as an absolute URL
/// 4. Scheme must be `http` or `https`
/// 5. Must carry a non-empty host
///
/// # Errors
///
/// Returns the matching [`UrlValidationError`] variant for the first rule that
/// fails.
///
/// # Examples
///
/// ```
/// use shorturl::utils::url_parser::parse_candidate;
///
/// let parsed = parse_candidate("https://WWW.Example.com/Path").unwrap();
/// assert_eq!(parsed.as_str(), "https://WWW.Example.com/Path");
/// assert_eq!(parsed.lookup_domain(), Some("www.example.com"));
/// ```
pub fn parse_candidate(candidate: &str) -> Result<ParsedUrl, UrlValidationError> {
    if candidate.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if candidate.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    // The WHATWG parser silently strips tab and newlines; the stored value would not.
    if candidate.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::Malformed(
            "URL contains control characters".to_string(),
        ));
    }

    let url = Url::parse(candidate).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    let host = match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => Host::Domain(domain.to_string()),
        Some(Host::Domain(_)) | None => return Err(UrlValidationError::MissingHost),
        Some(Host::Ipv4(addr)) => Host::Ipv4(addr),
        Some(Host::Ipv6(addr)) => Host::Ipv6(addr),
    };

    Ok(ParsedUrl {
        original: candidate.to_string(),
        host,
    })
}
