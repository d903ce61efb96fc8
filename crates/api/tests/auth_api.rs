//! HTTP-level integration tests for the auth endpoints.
//!
//! Tests cover login, token refresh with rotation, logout revocation,
//! the current-principal endpoint, and the route guard on protected
//! admin routes.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth};
use sqlx::PgPool;
use sitio_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200 with tokens and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let password = common::create_admin(&pool, "ana@test.com").await;
    let app = common::build_test_app(pool);

    let json = common::login_json(app, "ana@test.com", &password).await;

    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["email"], "ana@test.com");
}

/// Login with an incorrect password returns 401 with a structured error body.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    common::create_admin(&pool, "ana@test.com").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ana@test.com", "password": "incorrect" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert!(json["error"].is_string());
}

/// Login with a nonexistent email returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@test.com", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login to a deactivated account returns 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_inactive_user(pool: PgPool) {
    let password = common::create_admin(&pool, "inactive@test.com").await;
    let user = UserRepo::find_by_email(&pool, "inactive@test.com")
        .await
        .expect("lookup should succeed")
        .expect("user must exist");
    UserRepo::deactivate(&pool, user.id)
        .await
        .expect("deactivation should succeed");

    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "inactive@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Refresh / logout
// ---------------------------------------------------------------------------

/// A valid refresh token returns new tokens and rotates out the old one.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_rotates_token(pool: PgPool) {
    let password = common::create_admin(&pool, "ana@test.com").await;
    let app = common::build_test_app(pool);

    let login = common::login_json(app.clone(), "ana@test.com", &password).await;
    let refresh_token = login["refresh_token"].as_str().unwrap().to_string();

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app.clone(), "/api/v1/auth/refresh", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let refreshed = body_json(response).await;
    assert!(refreshed["access_token"].is_string());
    assert_ne!(refreshed["refresh_token"], login["refresh_token"]);

    // The old refresh token was revoked by rotation.
    let replay = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(replay.status(), StatusCode::UNAUTHORIZED);
}

/// An unknown refresh token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_unknown_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "refresh_token": "not-a-real-token" });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes the refresh session.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    let password = common::create_admin(&pool, "ana@test.com").await;
    let app = common::build_test_app(pool);

    let login = common::login_json(app.clone(), "ana@test.com", &password).await;
    let access_token = login["access_token"].as_str().unwrap();
    let refresh_token = login["refresh_token"].as_str().unwrap();

    let response = common::post_auth(app.clone(), "/api/v1/auth/logout", access_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The refresh token no longer works.
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Current principal + route guard
// ---------------------------------------------------------------------------

/// GET /auth/me returns the authenticated principal.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_principal(pool: PgPool) {
    let password = common::create_admin(&pool, "ana@test.com").await;
    let app = common::build_test_app(pool);

    let login = common::login_json(app.clone(), "ana@test.com", &password).await;
    let token = login["access_token"].as_str().unwrap();

    let response = get_auth(app, "/api/v1/auth/me", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], "ana@test.com");
}

/// Protected routes reject anonymous requests with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_guard_rejects_missing_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app, "/api/v1/admin/workshops").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Protected routes reject garbage tokens with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_guard_rejects_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/admin/workshops", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// With a valid token the same route serves normally.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_guard_allows_valid_token(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::authed_token(&pool, app.clone()).await;

    let response = get_auth(app, "/api/v1/admin/workshops", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Logout without a token is itself guarded.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/auth/logout",
        serde_json::json!({}),
        "invalid-token",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
