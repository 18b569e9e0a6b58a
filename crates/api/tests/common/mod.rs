//! Shared helpers for HTTP-level integration tests.
//!
//! Each test binary uses a subset of these helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use komitrack_api::auth::jwt::JwtConfig;
use komitrack_api::config::ServerConfig;
use komitrack_api::router::build_app_router;
use komitrack_api::state::AppState;
use komitrack_ocr::OcrClient;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
///
/// The recognition URL points at a local port nothing listens on; tests that
/// exercise the receipt endpoint pass their own URL via
/// [`build_test_app_with_ocr`].
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        ocr_url: "http://127.0.0.1:1/extract_isbns".to_string(),
        ocr_timeout_secs: 5,
        jwt: JwtConfig {
            secret: "integration-test-secret-that-is-long-enough".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This calls the same [`build_app_router`] used by `main.rs` so integration
/// tests exercise the production middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    build_app_with_config(pool, config)
}

/// Like [`build_test_app`] but pointing the recognition client at the given
/// endpoint URL (usually a mock backend bound to an ephemeral port).
pub fn build_test_app_with_ocr(pool: PgPool, ocr_url: &str) -> Router {
    let mut config = test_config();
    config.ocr_url = ocr_url.to_string();
    build_app_with_config(pool, config)
}

/// Like [`build_test_app_with_ocr`] but with an explicit recognition timeout,
/// for tests that make the backend outlast it.
pub fn build_test_app_with_ocr_timeout(pool: PgPool, ocr_url: &str, timeout_secs: u64) -> Router {
    let mut config = test_config();
    config.ocr_url = ocr_url.to_string();
    config.ocr_timeout_secs = timeout_secs;
    build_app_with_config(pool, config)
}

fn build_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let ocr = OcrClient::new(config.ocr_url.clone(), config.ocr_timeout_secs);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ocr: Arc::new(ocr),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

/// Send a POST request with a JSON body, without authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

/// Send a POST request with a JSON body and a Bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

/// Send a POST request with no body but a Bearer token.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

/// Send a DELETE request with a Bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

/// Send a multipart POST with a single `file` part and a Bearer token.
pub async fn post_file_auth(
    app: Router,
    uri: &str,
    token: &str,
    filename: &str,
    content_type: &str,
    bytes: &[u8],
) -> Response {
    let boundary = "----komitrack-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

/// Read a response body to completion and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Register a user via the API and return `(user_id, access_token)` after
/// logging in.
pub async fn register_and_login(app: &Router, username: &str) -> (i64, String) {
    let password = "test_password_123!";

    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": password,
    });
    let response = post_json(app.clone(), "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let user = body_json(response).await;
    let user_id = user["id"].as_i64().expect("user id should be a number");

    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let token = json["access_token"]
        .as_str()
        .expect("access token should be a string")
        .to_string();

    (user_id, token)
}
