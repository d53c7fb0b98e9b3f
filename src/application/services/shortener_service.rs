//! Short url creation and resolution service.

use std::sync::Arc;
use std::time::Duration;

use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, error, info, warn};

use crate::application::services::UrlValidator;
use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{StoreError, UrlMappingRepository};
use crate::utils::url_parser::UrlValidationError;

/// Errors returned by [`ShortenerService::create`].
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] UrlValidationError),

    #[error("short url assignment still conflicting after {attempts} attempts")]
    Conflict { attempts: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors returned by [`ShortenerService::resolve`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("short url {0} does not exist")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Service for creating and resolving short urls.
///
/// Short ids are assigned sequentially as `max + 1`. The read and the insert
/// are not atomic, so concurrent creators may pick the same id; the store's
/// unique constraint rejects the loser, which retries with a fresh maximum.
pub struct ShortenerService {
    repository: Arc<dyn UrlMappingRepository>,
    validator: UrlValidator,
    max_retries: usize,
}

impl ShortenerService {
    /// Creates a new shortener service.
    ///
    /// `max_retries` bounds how many times id assignment is retried after
    /// losing a race on `short_url`.
    pub fn new(
        repository: Arc<dyn UrlMappingRepository>,
        validator: UrlValidator,
        max_retries: usize,
    ) -> Self {
        Self {
            repository,
            validator,
            max_retries,
        }
    }

    /// Shortens `original_url`, or returns its existing mapping.
    ///
    /// # Flow
    ///
    /// 1. Validate the URL (structure and DNS)
    /// 2. Return the existing mapping if the URL was shortened before
    /// 3. Assign `max + 1` and insert, retrying on `short_url` conflicts
    /// 4. On an `original_url` conflict, return the concurrent winner's mapping
    ///
    /// # Errors
    ///
    /// - [`ShortenError::InvalidUrl`] if validation fails; nothing is persisted
    /// - [`ShortenError::Conflict`] if every assignment attempt lost a race
    /// - [`ShortenError::Store`] on store failures, including a duplicate URL
    ///   rejection for a row that then cannot be read back
    pub async fn create(&self, original_url: &str) -> Result<UrlMapping, ShortenError> {
        let parsed = self.validator.validate(original_url).await?;
        let original_url = parsed.as_str();

        if let Some(existing) = self.repository.find_by_original_url(original_url).await? {
            debug!(short_url = existing.short_url, "URL already shortened");
            return Ok(existing);
        }

        let strategy = ExponentialBackoff::from_millis(2)
            .max_delay(Duration::from_millis(100))
            .map(jitter)
            .take(self.max_retries);

        let assigned = RetryIf::spawn(
            strategy,
            || self.assign_next_short_url(original_url),
            |e: &StoreError| matches!(e, StoreError::DuplicateShortUrl(_)),
        )
        .await;

        match assigned {
            Ok(mapping) => {
                info!(short_url = mapping.short_url, "Short url created");
                Ok(mapping)
            }
            Err(StoreError::DuplicateShortUrl(_)) => {
                let attempts = self.max_retries + 1;
                warn!(attempts, "Giving up on short url assignment");
                Err(ShortenError::Conflict { attempts })
            }
            Err(StoreError::DuplicateOriginalUrl(url)) => {
                debug!("URL shortened concurrently, returning existing mapping");
                match self.repository.find_by_original_url(original_url).await? {
                    Some(existing) => Ok(existing),
                    None => {
                        error!("Store rejected a duplicate URL it does not contain");
                        Err(StoreError::DuplicateOriginalUrl(url).into())
                    }
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the original URL for `short_url`.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::NotFound`] if the id was never assigned
    /// - [`ResolveError::Store`] on store failures
    pub async fn resolve(&self, short_url: i64) -> Result<String, ResolveError> {
        self.repository
            .find_by_short_url(short_url)
            .await?
            .map(|mapping| mapping.original_url)
            .ok_or(ResolveError::NotFound(short_url))
    }

    /// One assignment attempt: read the current maximum and insert `max + 1`.
    async fn assign_next_short_url(&self, original_url: &str) -> Result<UrlMapping, StoreError> {
        let current_max = self.repository.find_max_short_url().await?;
        let mapping = UrlMapping::new(original_url, UrlMapping::next_short_url(current_max));

        self.repository.insert(&mapping).await.inspect_err(|e| {
            if let StoreError::DuplicateShortUrl(short_url) = e {
                warn!(short_url, "Short url taken by a concurrent writer");
            }
        })?;

        Ok(mapping)
    }
}
