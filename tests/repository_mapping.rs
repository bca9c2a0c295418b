mod common;

use drop_reg::AppError;
use drop_reg::domain::entities::NewMapping;
use drop_reg::domain::repositories::MappingRepository;
use drop_reg::infrastructure::persistence::SqliteMappingRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

fn new_mapping(code: &str, owner: &str) -> NewMapping {
    NewMapping {
        short_code: code.to_string(),
        discord_url: format!("https://discord.gg/{code}"),
        owner_id: owner.to_string(),
        expires_at: None,
    }
}

#[sqlx::test]
async fn test_create_mapping(pool: SqlitePool) {
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    let mapping = repo.create(new_mapping("597", "user1")).await.unwrap();

    assert!(mapping.id > 0);
    assert_eq!(mapping.short_code, "597");
    assert_eq!(mapping.discord_url, "https://discord.gg/597");
    assert_eq!(mapping.owner_id, "user1");
    assert!(mapping.expires_at.is_none());
}

#[sqlx::test]
async fn test_create_duplicate_is_conflict(pool: SqlitePool) {
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    repo.create(new_mapping("597", "user1")).await.unwrap();
    let result = repo.create(new_mapping("597", "user2")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));

    // First owner keeps the code
    assert_eq!(
        repo.find_owner("597").await.unwrap().as_deref(),
        Some("user1")
    );
}

#[sqlx::test]
async fn test_find_active(pool: SqlitePool) {
    common::create_test_mapping(&pool, "abc", "https://discord.gg/abc", "user1").await;
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    let mapping = repo.find_active("abc").await.unwrap().unwrap();
    assert_eq!(mapping.discord_url, "https://discord.gg/abc");

    assert!(repo.find_active("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_expired_mapping_is_not_active(pool: SqlitePool) {
    common::create_expired_mapping(&pool, "old", "https://discord.gg/old", "user1").await;
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    assert!(repo.find_active("old").await.unwrap().is_none());
    // Ownership is still visible for expired rows
    assert_eq!(repo.find_owner("old").await.unwrap().as_deref(), Some("user1"));
}

#[sqlx::test]
async fn test_list_active_by_owner(pool: SqlitePool) {
    common::create_expired_mapping(&pool, "old", "https://discord.gg/old", "user1").await;
    common::create_test_mapping(&pool, "other", "https://discord.gg/other", "user2").await;

    let repo = SqliteMappingRepository::new(Arc::new(pool));
    repo.create(new_mapping("first", "user1")).await.unwrap();
    repo.create(new_mapping("second", "user1")).await.unwrap();

    let links = repo.list_active_by_owner("user1").await.unwrap();
    let codes: Vec<&str> = links.iter().map(|m| m.short_code.as_str()).collect();

    // Newest first; ties on created_at fall back to insertion order
    assert_eq!(codes, vec!["second", "first"]);

    assert!(repo.list_active_by_owner("nobody").await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_delete_owned(pool: SqlitePool) {
    common::create_test_mapping(&pool, "597", "https://discord.gg/abc", "user1").await;
    let repo = SqliteMappingRepository::new(Arc::new(pool));

    assert_eq!(repo.delete_owned("597", "user2").await.unwrap(), 0);
    assert!(repo.find_active("597").await.unwrap().is_some());

    assert_eq!(repo.delete_owned("597", "user1").await.unwrap(), 1);
    assert!(repo.find_active("597").await.unwrap().is_none());
    assert!(repo.find_owner("597").await.unwrap().is_none());

    assert_eq!(repo.delete_owned("597", "user1").await.unwrap(), 0);
}

#[sqlx::test]
async fn test_purge_expired_and_count(pool: SqlitePool) {
    common::create_expired_mapping(&pool, "old1", "https://discord.gg/a", "user1").await;
    common::create_expired_mapping(&pool, "old2", "https://discord.gg/b", "user2").await;
    common::create_test_mapping(&pool, "live", "https://discord.gg/c", "user1").await;

    let repo = SqliteMappingRepository::new(Arc::new(pool.clone()));

    assert_eq!(repo.count_active().await.unwrap(), 1);
    assert_eq!(repo.purge_expired().await.unwrap(), 2);
    assert_eq!(repo.purge_expired().await.unwrap(), 0);
    assert_eq!(common::count_mappings(&pool).await, 1);
}
