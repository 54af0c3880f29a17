//! PostgreSQL repository tests. Each test gets a fresh database with
//! migrations applied; run with `cargo test -- --ignored` and `DATABASE_URL` set.

use alias_shortener::domain::entities::NewAlias;
use alias_shortener::domain::repositories::AliasRepository;
use alias_shortener::error::AppError;
use alias_shortener::infrastructure::persistence::PgAliasRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_alias(alias: &str, url: &str) -> NewAlias {
    NewAlias {
        alias: alias.to_string(),
        url: url.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_alias(pool: PgPool) {
    let repo = PgAliasRepository::new(Arc::new(pool));

    let record = repo
        .create_unique(new_alias("abc", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(record.alias, "abc");
    assert_eq!(record.url, "https://example.com");
    assert_eq!(record.clicks, 0);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_duplicate_alias_is_conflict(pool: PgPool) {
    let repo = PgAliasRepository::new(Arc::new(pool));
    repo.ensure_unique_index().await.unwrap();
    repo.create_unique(new_alias("abc", "https://example.com"))
        .await
        .unwrap();

    let result = repo
        .create_unique(new_alias("abc", "https://other.com"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));

    let stored = repo.find_by_alias("abc").await.unwrap().unwrap();
    assert_eq!(stored.url, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_find_by_alias(pool: PgPool) {
    let repo = PgAliasRepository::new(Arc::new(pool));
    repo.create_unique(new_alias("find-me", "https://example.com/page"))
        .await
        .unwrap();

    let found = repo.find_by_alias("find-me").await.unwrap();
    let missing = repo.find_by_alias("Find-Me").await.unwrap();

    assert_eq!(found.unwrap().url, "https://example.com/page");
    assert!(missing.is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_increment_clicks(pool: PgPool) {
    let repo = PgAliasRepository::new(Arc::new(pool));
    repo.create_unique(new_alias("counted", "https://example.com"))
        .await
        .unwrap();

    for _ in 0..3 {
        assert!(repo.increment_clicks("counted").await.unwrap());
    }

    let record = repo.find_by_alias("counted").await.unwrap().unwrap();
    assert_eq!(record.clicks, 3);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_increment_missing_alias(pool: PgPool) {
    let repo = PgAliasRepository::new(Arc::new(pool));

    let updated = repo.increment_clicks("ghost").await.unwrap();

    assert!(!updated);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_concurrent_increments_are_not_lost(pool: PgPool) {
    let repo = Arc::new(PgAliasRepository::new(Arc::new(pool)));
    repo.create_unique(new_alias("busy", "https://example.com"))
        .await
        .unwrap();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.increment_clicks("busy").await })
        })
        .collect();
    for handle in handles {
        assert!(handle.await.unwrap().unwrap());
    }

    let record = repo.find_by_alias("busy").await.unwrap().unwrap();
    assert_eq!(record.clicks, 20);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_ensure_unique_index_is_idempotent(pool: PgPool) {
    let repo = PgAliasRepository::new(Arc::new(pool.clone()));
    repo.ensure_unique_index().await.unwrap();
    repo.ensure_unique_index().await.unwrap();

    // A second repository runs the DDL again against the same database.
    let other = PgAliasRepository::new(Arc::new(pool));
    other.ensure_unique_index().await.unwrap();
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_stats(pool: PgPool) {
    let repo = PgAliasRepository::new(Arc::new(pool));
    repo.create_unique(new_alias("one", "https://example.com/1"))
        .await
        .unwrap();
    repo.create_unique(new_alias("two", "https://example.com/2"))
        .await
        .unwrap();
    repo.increment_clicks("one").await.unwrap();
    repo.increment_clicks("one").await.unwrap();
    repo.increment_clicks("two").await.unwrap();

    let stats = repo.stats().await.unwrap();

    assert_eq!(stats.aliases, 2);
    assert_eq!(stats.clicks, 3);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_ping(pool: PgPool) {
    let repo = PgAliasRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
