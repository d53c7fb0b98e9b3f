mod common;

use shorturl::domain::entities::UrlMapping;
use shorturl::domain::repositories::{StoreError, UrlMappingRepository};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn test_empty_store(pool: SqlitePool) {
    let repo = common::create_repository(pool);

    assert_eq!(repo.find_max_short_url().await.unwrap(), None);
    assert_eq!(repo.count().await.unwrap(), 0);
    assert!(repo.find_by_short_url(1).await.unwrap().is_none());
    assert!(
        repo.find_by_original_url("https://example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn test_insert_and_find(pool: SqlitePool) {
    let repo = common::create_repository(pool);
    let mapping = UrlMapping::new("https://www.freecodecamp.org", 1);

    repo.insert(&mapping).await.unwrap();

    assert_eq!(
        repo.find_by_short_url(1).await.unwrap(),
        Some(mapping.clone())
    );
    assert_eq!(
        repo.find_by_original_url("https://www.freecodecamp.org")
            .await
            .unwrap(),
        Some(mapping)
    );
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn test_original_url_is_matched_exactly(pool: SqlitePool) {
    let repo = common::create_repository(pool.clone());
    common::create_test_mapping(&pool, "https://example.com", 1).await;

    assert!(
        repo.find_by_original_url("https://example.com/")
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        repo.find_by_original_url("https://EXAMPLE.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn test_max_short_url_is_numeric(pool: SqlitePool) {
    let repo = common::create_repository(pool.clone());
    common::create_test_mapping(&pool, "https://a.example.com", 2).await;
    common::create_test_mapping(&pool, "https://b.example.com", 10).await;
    common::create_test_mapping(&pool, "https://c.example.com", 9).await;

    assert_eq!(repo.find_max_short_url().await.unwrap(), Some(10));
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn test_duplicate_short_url_is_rejected(pool: SqlitePool) {
    let repo = common::create_repository(pool.clone());
    common::create_test_mapping(&pool, "https://a.example.com", 1).await;

    let err = repo
        .insert(&UrlMapping::new("https://b.example.com", 1))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::DuplicateShortUrl(1)));
    assert_eq!(common::all_mappings(&pool).await.len(), 1);
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn test_duplicate_original_url_is_rejected(pool: SqlitePool) {
    let repo = common::create_repository(pool.clone());
    common::create_test_mapping(&pool, "https://a.example.com", 1).await;

    let err = repo
        .insert(&UrlMapping::new("https://a.example.com", 2))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::DuplicateOriginalUrl(ref url) if url == "https://a.example.com"));
    assert_eq!(common::all_mappings(&pool).await.len(), 1);
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn test_non_positive_short_url_is_rejected(pool: SqlitePool) {
    let repo = common::create_repository(pool);

    let err = repo
        .insert(&UrlMapping::new("https://a.example.com", 0))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Unavailable(_)));
}

#[sqlx::test(migrations = "./migrations/sqlite")]
async fn test_list_pages_in_short_url_order(pool: SqlitePool) {
    let repo = common::create_repository(pool.clone());
    for id in [3, 1, 5, 2, 4] {
        common::create_test_mapping(&pool, &format!("https://example.com/{id}"), id).await;
    }

    let first = repo.list(1, 2).await.unwrap();
    let ids: Vec<i64> = first.iter().map(|m| m.short_url).collect();
    assert_eq!(ids, vec![1, 2]);

    let third = repo.list(3, 2).await.unwrap();
    let ids: Vec<i64> = third.iter().map(|m| m.short_url).collect();
    assert_eq!(ids, vec![5]);

    assert!(repo.list(4, 2).await.unwrap().is_empty());
    assert_eq!(repo.count().await.unwrap(), 5);
}
