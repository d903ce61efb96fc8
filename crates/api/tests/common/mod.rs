#![allow(dead_code)] // not every test file uses every helper

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use sitio_api::auth::jwt::JwtConfig;
use sitio_api::auth::password::hash_password;
use sitio_api::config::ServerConfig;
use sitio_api::router::build_app_router;
use sitio_api::state::AppState;
use sitio_db::models::user::CreateUser;
use sitio_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool. Mirrors production router construction so
/// tests exercise the same middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request with optional JSON body and optional Bearer token.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request must build"),
        None => builder.body(Body::empty()).expect("request must build"),
    };
    app.oneshot(request).await.expect("request must not fail")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    request(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    request(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    request(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    request(app, Method::POST, uri, None, Some(token)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    request(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    request(app, Method::DELETE, uri, None, Some(token)).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be valid JSON")
}

// ---------------------------------------------------------------------------
// Auth fixtures
// ---------------------------------------------------------------------------

/// Create an admin user directly in the database, returning the
/// plaintext password used.
pub async fn create_admin(pool: &PgPool, email: &str) -> String {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: hashed,
        },
    )
    .await
    .expect("user creation should succeed");
    password.to_string()
}

/// Log in via the API and return the full JSON response.
pub async fn login_json(app: Router, email: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Create an admin, log in, and return a valid access token.
pub async fn authed_token(pool: &PgPool, app: Router) -> String {
    let password = create_admin(pool, "admin@test.com").await;
    let json = login_json(app, "admin@test.com", &password).await;
    json["access_token"]
        .as_str()
        .expect("login must return access_token")
        .to_string()
}
