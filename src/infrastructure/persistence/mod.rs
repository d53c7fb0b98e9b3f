//! SQL repository implementations and pool bootstrap.
//!
//! Concrete implementations of [`UrlMappingRepository`] using SQLx runtime
//! queries. The backend is chosen from the `DATABASE_URL` scheme.
//!
//! # Repositories
//!
//! - [`PgUrlMappingRepository`] - PostgreSQL
//! - [`SqliteUrlMappingRepository`] - SQLite

pub mod pg_url_mapping_repository;
pub mod sqlite_url_mapping_repository;

pub use pg_url_mapping_repository::PgUrlMappingRepository;
pub use sqlite_url_mapping_repository::SqliteUrlMappingRepository;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, DatabaseBackend};
use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{StoreError, UrlMappingRepository};
use crate::utils::db_error::{MappingField, unique_violation_field};

/// Maps a failed insert to the uniqueness conflict it represents, if any.
pub(crate) fn insert_error(e: sqlx::Error, mapping: &UrlMapping) -> StoreError {
    match unique_violation_field(&e) {
        Some(MappingField::ShortUrl) => StoreError::DuplicateShortUrl(mapping.short_url),
        Some(MappingField::OriginalUrl) => {
            StoreError::DuplicateOriginalUrl(mapping.original_url.clone())
        }
        None => StoreError::Unavailable(e),
    }
}

/// Connects to the configured database, applies migrations and returns the
/// matching repository.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn connect(config: &Config) -> Result<Arc<dyn UrlMappingRepository>> {
    let acquire_timeout = Duration::from_secs(config.db_connect_timeout);
    let idle_timeout = Duration::from_secs(config.db_idle_timeout);
    let max_lifetime = Duration::from_secs(config.db_max_lifetime);

    match config.database_backend() {
        DatabaseBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(acquire_timeout)
                .idle_timeout(Some(idle_timeout))
                .max_lifetime(Some(max_lifetime))
                .connect(&config.database_url)
                .await
                .context("Failed to connect to PostgreSQL")?;
            tracing::info!("Connected to database (PostgreSQL)");

            PgUrlMappingRepository::run_migrations(&pool)
                .await
                .context("Failed to apply PostgreSQL migrations")?;

            Ok(Arc::new(PgUrlMappingRepository::new(Arc::new(pool))))
        }
        DatabaseBackend::Sqlite => {
            let pool = SqlitePoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(acquire_timeout)
                .idle_timeout(Some(idle_timeout))
                .max_lifetime(Some(max_lifetime))
                .connect(&config.database_url)
                .await
                .context("Failed to open SQLite database")?;
            tracing::info!("Connected to database (SQLite)");

            SqliteUrlMappingRepository::run_migrations(&pool)
                .await
                .context("Failed to apply SQLite migrations")?;

            Ok(Arc::new(SqliteUrlMappingRepository::new(Arc::new(pool))))
        }
    }
}
