mod common;

use sqlx::SqlitePool;

#[sqlx::test]
async fn test_landing_page_for_anonymous_visitor(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 200);
    let body = response.text();
    assert!(body.contains("/auth/login"));
    assert!(!body.contains("/auth/logout"));
}

#[sqlx::test]
async fn test_dashboard_lists_own_active_links(pool: SqlitePool) {
    common::create_test_mapping(&pool, "mine", "https://discord.gg/mine", "user1").await;
    common::create_expired_mapping(&pool, "stale", "https://discord.gg/stale", "user1").await;
    common::create_test_mapping(&pool, "theirs", "https://discord.gg/theirs", "user2").await;
    let cookie = common::sign_in(&pool, "user1").await;
    let server = common::create_test_server(pool);

    let response = server.get("/").add_header("Cookie", cookie).await;

    assert_eq!(response.status_code(), 200);
    let body = response.text();
    assert!(body.contains("user-user1"));
    assert!(body.contains("https://drop-reg.cc/mine"));
    assert!(body.contains("https://discord.gg/mine"));
    assert!(!body.contains("stale"));
    assert!(!body.contains("theirs"));
}

#[sqlx::test]
async fn test_dashboard_alias(pool: SqlitePool) {
    common::create_test_mapping(&pool, "mine", "https://discord.gg/mine", "user1").await;
    let cookie = common::sign_in(&pool, "user1").await;
    let server = common::create_test_server(pool);

    let response = server.get("/dashboard").add_header("Cookie", cookie).await;

    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("https://discord.gg/mine"));
}

#[sqlx::test]
async fn test_dashboard_without_links(pool: SqlitePool) {
    let cookie = common::sign_in(&pool, "user1").await;
    let server = common::create_test_server(pool);

    let response = server.get("/").add_header("Cookie", cookie).await;

    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains("not registered any links"));
}

#[sqlx::test]
async fn test_unknown_cookie_falls_back_to_landing(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .get("/")
        .add_header("Cookie", "theme=dark; session_id=deadbeef")
        .await;

    assert_eq!(response.status_code(), 200);
    assert!(!response.text().contains("/auth/logout"));
}
