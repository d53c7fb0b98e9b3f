//! SQLite implementation of the url mapping repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::migrate::MigrateError;
use std::sync::Arc;

use super::insert_error;
use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{StoreError, UrlMappingRepository};

/// SQLite repository for url mappings, used for single-node deployments and
/// tests.
pub struct SqliteUrlMappingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlMappingRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Applies the SQLite schema migrations.
    pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations/sqlite").run(pool).await
    }
}

#[async_trait]
impl UrlMappingRepository for SqliteUrlMappingRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT original_url, short_url
            FROM url_mappings
            WHERE original_url = ?
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<UrlMapping>, StoreError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT original_url, short_url
            FROM url_mappings
            WHERE short_url = ?
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_max_short_url(&self) -> Result<Option<i64>, StoreError> {
        let max = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT short_url
            FROM url_mappings
            ORDER BY short_url DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(max)
    }

    async fn insert(&self, mapping: &UrlMapping) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO url_mappings (original_url, short_url)
            VALUES (?, ?)
            "#,
        )
        .bind(&mapping.original_url)
        .bind(mapping.short_url)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| insert_error(e, mapping))?;

        Ok(())
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<UrlMapping>, StoreError> {
        let offset = (page.max(1) - 1) * page_size;

        let mappings = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT original_url, short_url
            FROM url_mappings
            ORDER BY short_url ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page_size)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(mappings)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
