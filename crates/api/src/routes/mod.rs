pub mod auth;
pub mod health;
pub mod site_config;
pub mod workshops;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                       login (public)
/// /auth/refresh                     refresh (public)
/// /auth/logout                      logout (requires auth)
/// /auth/me                          current principal (requires auth)
///
/// /workshops                        public catalog list
/// /workshops/{id}                   public single record
/// /site-config                      public site configuration
///
/// /admin/workshops                  list, create (requires auth)
/// /admin/workshops/migrate          one-time seed migration (POST)
/// /admin/workshops/{id}             get, update, delete
///
/// /admin/site-config                get, merge update
/// /admin/site-config/carousel       append image (POST)
/// /admin/site-config/carousel/{i}   remove by index (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout, me).
        .nest("/auth", auth::router())
        // Public catalog and configuration reads.
        .nest("/workshops", workshops::public_router())
        .nest("/site-config", site_config::public_router())
        // Guarded admin content management.
        .nest("/admin/workshops", workshops::admin_router())
        .nest("/admin/site-config", site_config::admin_router())
}
