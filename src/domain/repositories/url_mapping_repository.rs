//! Repository trait for url mapping data access.

use crate::domain::entities::UrlMapping;
use async_trait::async_trait;

/// Errors reported by a [`UrlMappingRepository`].
///
/// Uniqueness violations are distinguished by the column that was violated so
/// the caller can decide between retrying id assignment and re-reading the
/// mapping a concurrent writer created.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("short url {0} is already assigned")]
    DuplicateShortUrl(i64),

    #[error("original url is already shortened: {0}")]
    DuplicateOriginalUrl(String),

    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// Repository interface for the persisted set of url mappings.
///
/// Both `original_url` and `short_url` are unique at the store level; an
/// implementation must reject a conflicting insert rather than rely on
/// callers checking first.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlMappingRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::SqliteUrlMappingRepository`] - SQLite
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlMappingRepository: Send + Sync {
    /// Finds the mapping for an original URL, compared byte for byte.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, StoreError>;

    /// Finds the mapping assigned to a short id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlMapping>, StoreError>;

    /// Returns the highest assigned short id, or `None` while the store is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn find_max_short_url(&self) -> Result<Option<i64>, StoreError>;

    /// Persists a new mapping.
    ///
    /// # Errors
    ///
    /// - [`StoreError::DuplicateShortUrl`] if the short id is taken
    /// - [`StoreError::DuplicateOriginalUrl`] if the URL is already mapped
    /// - [`StoreError::Unavailable`] on any other database error
    async fn insert(&self, mapping: &UrlMapping) -> Result<(), StoreError>;

    /// Lists mappings ordered by short id, `page` starting at 1.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<UrlMapping>, StoreError>;

    /// Counts all mappings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on database errors.
    async fn count(&self) -> Result<i64, StoreError>;
}
