//! Route definitions for the site-configuration singleton.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::site_config;
use crate::state::AppState;

/// Public read mounted at `/site-config`.
///
/// ```text
/// GET /  -> get (defaults applied when nothing has been saved)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(site_config::get))
}

/// Admin configuration routes mounted at `/admin/site-config`.
///
/// ```text
/// GET    /                  -> admin_get
/// PUT    /                  -> update (merge-upsert)
/// POST   /carousel          -> add_carousel_image
/// DELETE /carousel/{index}  -> remove_carousel_image
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(site_config::admin_get).put(site_config::update))
        .route("/carousel", post(site_config::add_carousel_image))
        .route(
            "/carousel/{index}",
            delete(site_config::remove_carousel_image),
        )
}
