//! HTTP-level integration tests for the auth endpoints.
//!
//! Tests cover registration, login, token refresh with rotation, logout,
//! and password changes.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_auth, post_json, post_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Register a user via the API with the given username.
async fn register(app: axum::Router, username: &str, password: &str) -> axum::response::Response {
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": password,
    });
    post_json(app, "/api/v1/auth/register", body).await
}

/// Log in a user via the API and return the JSON response containing
/// `access_token`, `refresh_token`, and `user` info.
async fn login_user(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Successful registration returns 201 with the public user fields only.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = register(app, "newuser", "test_password_123!").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["username"], "newuser");
    assert_eq!(json["email"], "newuser@test.com");
    assert!(json["id"].is_number());
    assert!(
        json.get("password_hash").is_none(),
        "password hash must never appear in a response"
    );
}

/// Registering a duplicate username returns 409 and leaves no partial row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_username_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = register(app, "dupe", "test_password_123!").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "username": "dupe",
        "email": "other@test.com",
        "password": "test_password_123!",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = 'dupe'")
        .fetch_one(&pool)
        .await
        .expect("count query should succeed");
    assert_eq!(count, 1, "failed registration must not insert a row");
}

/// Registration with a malformed email returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_invalid_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "bademail",
        "email": "not-an-email",
        "password": "test_password_123!",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Registration with a too-short password returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = register(app, "shortpw", "short").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns tokens and public user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register(app, "loginuser", "test_password_123!").await;

    let app = common::build_test_app(pool);
    let json = login_user(app, "loginuser", "test_password_123!").await;

    assert!(json["access_token"].is_string(), "response must contain access_token");
    assert!(json["refresh_token"].is_string(), "response must contain refresh_token");
    assert!(json["expires_in"].is_number(), "response must contain expires_in");
    assert_eq!(json["user"]["username"], "loginuser");
    assert_eq!(json["user"]["email"], "loginuser@test.com");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register(app, "wrongpw", "test_password_123!").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent username returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Refresh + logout
// ---------------------------------------------------------------------------

/// A valid refresh token returns new tokens; the old refresh token is
/// rotated out and cannot be used again.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_token_refresh_rotates(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register(app, "refresher", "test_password_123!").await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "refresher", "test_password_123!").await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let new_refresh = json["refresh_token"].as_str().unwrap();
    assert_ne!(new_refresh, refresh_token, "refresh token must rotate");

    // The original token was single-use.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Refresh with a garbage token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "refresh_token": "not-a-real-token" });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes all sessions: the refresh token stops working.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register(app, "logoutuser", "test_password_123!").await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "logoutuser", "test_password_123!").await;
    let access_token = login_json["access_token"].as_str().unwrap();
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_auth(app, "/api/v1/auth/logout", access_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Change password
// ---------------------------------------------------------------------------

/// Changing the password requires the current one and revokes sessions.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_change_password_flow(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register(app, "changer", "old_password_123!").await;

    let app = common::build_test_app(pool.clone());
    let login_json = login_user(app, "changer", "old_password_123!").await;
    let access_token = login_json["access_token"].as_str().unwrap();
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    // Wrong current password is rejected.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "current_password": "not_the_password",
        "new_password": "new_password_456!",
    });
    let response = post_json_auth(app, "/api/v1/auth/change-password", access_token, body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Correct current password succeeds.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "current_password": "old_password_123!",
        "new_password": "new_password_456!",
    });
    let response = post_json_auth(app, "/api/v1/auth/change-password", access_token, body).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Old refresh token was revoked with the change.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Old password no longer logs in; the new one does.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "changer", "password": "old_password_123!" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    login_user(app, "changer", "new_password_456!").await;
}

// ---------------------------------------------------------------------------
// Auth enforcement
// ---------------------------------------------------------------------------

/// Protected endpoints reject requests without a token or with a bad token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_routes_require_token(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = common::get(app, "/api/v1/series").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/series", "garbage.token.here").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// The health endpoint is public and reports database status.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_endpoint_is_public(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}
