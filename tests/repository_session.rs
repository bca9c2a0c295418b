mod common;

use chrono::Duration;
use drop_reg::AppError;
use drop_reg::domain::entities::NewSession;
use drop_reg::domain::repositories::SessionRepository;
use drop_reg::infrastructure::persistence::SqliteSessionRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_and_find_user(pool: SqlitePool) {
    common::create_test_user(&pool, "user1").await;
    let repo = SqliteSessionRepository::new(Arc::new(pool));

    let session = repo
        .create(NewSession::starting_now("a".repeat(64), "user1".to_string()))
        .await
        .unwrap();

    assert_eq!(session.expires_at - session.created_at, Duration::days(30));

    let user = repo.find_user(&session.id).await.unwrap().unwrap();
    assert_eq!(user.id, "user1");
    assert_eq!(user.username, "user-user1");
}

#[sqlx::test]
async fn test_find_user_unknown_session(pool: SqlitePool) {
    let repo = SqliteSessionRepository::new(Arc::new(pool));

    assert!(repo.find_user("does-not-exist").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_expired_session_resolves_to_nobody(pool: SqlitePool) {
    common::create_test_user(&pool, "user1").await;
    let session_id = common::create_test_session(&pool, "user1", Duration::hours(-1)).await;

    let repo = SqliteSessionRepository::new(Arc::new(pool));

    assert!(repo.find_user(&session_id).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_session_requires_existing_user(pool: SqlitePool) {
    let repo = SqliteSessionRepository::new(Arc::new(pool));

    let result = repo
        .create(NewSession::starting_now("b".repeat(64), "ghost".to_string()))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Storage(_)));
}

#[sqlx::test]
async fn test_delete_session(pool: SqlitePool) {
    common::create_test_user(&pool, "user1").await;
    let session_id = common::create_test_session(&pool, "user1", Duration::days(30)).await;

    let repo = SqliteSessionRepository::new(Arc::new(pool));

    assert!(repo.delete(&session_id).await.unwrap());
    assert!(!repo.delete(&session_id).await.unwrap());
    assert!(repo.find_user(&session_id).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_purge_expired_and_count(pool: SqlitePool) {
    common::create_test_user(&pool, "user1").await;
    common::create_test_user(&pool, "user2").await;
    common::create_test_session(&pool, "user1", Duration::hours(-1)).await;
    common::create_test_session(&pool, "user2", Duration::hours(-2)).await;
    let live = common::create_test_session(&pool, "user1", Duration::days(1)).await;

    let repo = SqliteSessionRepository::new(Arc::new(pool));

    assert_eq!(repo.count_active().await.unwrap(), 1);
    assert_eq!(repo.purge_expired().await.unwrap(), 2);
    assert_eq!(repo.count_active().await.unwrap(), 1);
    assert!(repo.find_user(&live).await.unwrap().is_some());
}
