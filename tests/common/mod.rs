#![allow(dead_code)]

use async_trait::async_trait;
use shorturl::application::services::{ShortenerService, UrlValidator};
use shorturl::domain::entities::UrlMapping;
use shorturl::domain::host_resolver::HostResolver;
use shorturl::domain::repositories::UrlMappingRepository;
use shorturl::infrastructure::persistence::SqliteUrlMappingRepository;
use shorturl::state::AppState;
use sqlx::SqlitePool;
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_MAX_RETRIES: usize = 5;

/// Resolver that never touches the network: every host resolves to a
/// documentation address except those under the reserved `.invalid` TLD.
pub struct StaticResolver;

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        if host.ends_with(".invalid") {
            return Ok(Vec::new());
        }
        Ok(vec![IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))])
    }
}

pub fn create_repository(pool: SqlitePool) -> Arc<dyn UrlMappingRepository> {
    Arc::new(SqliteUrlMappingRepository::new(Arc::new(pool)))
}

pub fn create_service(pool: SqlitePool, max_retries: usize) -> ShortenerService {
    let validator = UrlValidator::new(Arc::new(StaticResolver), Duration::from_secs(1));
    ShortenerService::new(create_repository(pool), validator, max_retries)
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(create_service(pool, DEFAULT_MAX_RETRIES)))
}

pub async fn create_test_mapping(pool: &SqlitePool, url: &str, short_url: i64) {
    sqlx::query("INSERT INTO url_mappings (original_url, short_url) VALUES (?, ?)")
        .bind(url)
        .bind(short_url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn all_mappings(pool: &SqlitePool) -> Vec<UrlMapping> {
    sqlx::query_as::<_, UrlMapping>(
        "SELECT original_url, short_url FROM url_mappings ORDER BY short_url",
    )
    .fetch_all(pool)
    .await
    .unwrap()
}
