//! Candidate URL validation: structure first, then hostname existence.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::host_resolver::HostResolver;
use crate::utils::url_parser::{ParsedUrl, UrlValidationError, parse_candidate};

/// Validates candidate URLs before they are shortened.
///
/// A URL is accepted when it is structurally valid and its host resolves to
/// at least one address within `lookup_timeout`. IP-literal hosts are
/// accepted without a lookup.
pub struct UrlValidator {
    resolver: Arc<dyn HostResolver>,
    lookup_timeout: Duration,
}

impl UrlValidator {
    pub fn new(resolver: Arc<dyn HostResolver>, lookup_timeout: Duration) -> Self {
        Self {
            resolver,
            lookup_timeout,
        }
    }

    /// Validates `candidate` and returns its parsed form.
    ///
    /// # Errors
    ///
    /// - Structural errors from [`parse_candidate`]
    /// - [`UrlValidationError::Unresolvable`] if the lookup fails or returns
    ///   no address
    /// - [`UrlValidationError::Timeout`] if the lookup does not finish in time
    pub async fn validate(&self, candidate: &str) -> Result<ParsedUrl, UrlValidationError> {
        let parsed = parse_candidate(candidate)?;

        let Some(domain) = parsed.lookup_domain() else {
            return Ok(parsed);
        };

        let lookup = tokio::time::timeout(self.lookup_timeout, self.resolver.resolve(domain));

        match lookup.await {
            Ok(Ok(addrs)) if !addrs.is_empty() => Ok(parsed),
            Ok(Ok(_)) => Err(UrlValidationError::Unresolvable(domain.to_string())),
            Ok(Err(e)) => {
                tracing::debug!(host = %domain, error = %e, "DNS lookup failed");
                Err(UrlValidationError::Unresolvable(domain.to_string()))
            }
            Err(_) => {
                tracing::warn!(host = %domain, "DNS lookup timed out");
                Err(UrlValidationError::Timeout {
                    host: domain.to_string(),
                    timeout_ms: self.lookup_timeout.as_millis() as u64,
                })
            }
        }
    }
}
