//! Integration tests for the site-configuration singleton.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

/// Before any save, reads serve built-in defaults rather than an error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_defaults_when_never_saved(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app, "/api/v1/site-config").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["hero"]["static_image"], "");
    assert_eq!(json["hero"]["carousel_images"], serde_json::json!([]));
    assert_eq!(json["about"]["bio"], "");
}

/// Saving only the hero section leaves a previously-saved about section
/// untouched.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_partial_update_preserves_other_section(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::authed_token(&pool, app.clone()).await;

    let full = serde_json::json!({
        "hero": { "static_image": "https://img.test/hero.jpg" },
        "about": {
            "bio": "Primera línea.\nSegunda línea.",
            "image_light": "https://img.test/about-light.jpg"
        }
    });
    let response = put_json_auth(app.clone(), "/api/v1/admin/site-config", full, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let hero_only = serde_json::json!({
        "hero": { "static_image": "https://img.test/hero-v2.jpg" }
    });
    let response =
        put_json_auth(app.clone(), "/api/v1/admin/site-config", hero_only, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get_auth(app, "/api/v1/admin/site-config", &token).await).await;
    assert_eq!(json["hero"]["static_image"], "https://img.test/hero-v2.jpg");
    // The about section survived the hero-only save.
    assert_eq!(json["about"]["bio"], "Primera línea.\nSegunda línea.");
    assert_eq!(json["about"]["image_light"], "https://img.test/about-light.jpg");
}

/// Carousel append validates non-blank trimmed input.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_carousel_add(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::authed_token(&pool, app.clone()).await;

    let blank = serde_json::json!({ "url": "   " });
    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/site-config/carousel",
        blank,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let padded = serde_json::json!({ "url": "  https://img.test/c1.jpg  " });
    let response =
        post_json_auth(app, "/api/v1/admin/site-config/carousel", padded, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["hero"]["carousel_images"],
        serde_json::json!(["https://img.test/c1.jpg"])
    );
}

/// Removing index 1 from [a, b, c] yields [a, c], preserving order.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_carousel_remove_by_index(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::authed_token(&pool, app.clone()).await;

    for url in ["a.jpg", "b.jpg", "c.jpg"] {
        let body = serde_json::json!({ "url": url });
        let response = post_json_auth(
            app.clone(),
            "/api/v1/admin/site-config/carousel",
            body,
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = delete_auth(app.clone(), "/api/v1/admin/site-config/carousel/1", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["hero"]["carousel_images"],
        serde_json::json!(["a.jpg", "c.jpg"])
    );

    // Out-of-range index is a 404.
    let response = delete_auth(app, "/api/v1/admin/site-config/carousel/7", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Admin config routes are guarded.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_config_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app.clone(), "/api/v1/admin/site-config").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = serde_json::json!({ "hero": { "static_image": "x" } });
    let response = common::request(
        app,
        axum::http::Method::PUT,
        "/api/v1/admin/site-config",
        Some(body),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
