//! Route definitions for the workshop catalog.
//!
//! Two routers are provided:
//! - `public_router()` for unauthenticated reads mounted at `/workshops`
//! - `admin_router()` for guarded content management mounted at `/admin/workshops`

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{migration, workshops};
use crate::state::AppState;

/// Public catalog routes mounted at `/workshops`.
///
/// ```text
/// GET /        -> list
/// GET /{id}    -> get_by_id
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(workshops::list))
        .route("/{id}", get(workshops::get_by_id))
}

/// Admin workshop routes mounted at `/admin/workshops`.
///
/// ```text
/// GET    /          -> admin_list
/// POST   /          -> create
/// POST   /migrate   -> migrate (one-time seed load)
/// GET    /{id}      -> admin_get
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(workshops::admin_list).post(workshops::create))
        .route("/migrate", post(migration::migrate))
        .route(
            "/{id}",
            get(workshops::admin_get)
                .put(workshops::update)
                .delete(workshops::delete),
        )
}
