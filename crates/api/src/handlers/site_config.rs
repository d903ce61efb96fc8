//! Handlers for the site-configuration singleton: public read, guarded
//! merge update, and carousel list operations.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use sitio_core::error::CoreError;
use sitio_db::models::site_config::{
    SiteConfigView, UpdateHeroConfig, UpdateSiteConfig,
};
use sitio_db::repositories::SiteConfigRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Fetch the stored config merged over defaults. An absent row is not an
/// error; it just means nothing has been saved yet.
async fn load_view(pool: &sqlx::PgPool) -> AppResult<SiteConfigView> {
    let view = SiteConfigRepo::get(pool)
        .await?
        .map(SiteConfigView::from_row)
        .unwrap_or_default();
    Ok(view)
}

// ---------------------------------------------------------------------------
// Public read
// ---------------------------------------------------------------------------

/// GET /api/v1/site-config
pub async fn get(State(state): State<AppState>) -> AppResult<Json<SiteConfigView>> {
    Ok(Json(load_view(&state.pool).await?))
}

// ---------------------------------------------------------------------------
// Admin (guarded)
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/site-config
pub async fn admin_get(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<SiteConfigView>> {
    Ok(Json(load_view(&state.pool).await?))
}

/// PUT /api/v1/admin/site-config
///
/// Merge-upsert: only provided fields overwrite stored values, so a save
/// touching one section leaves the other untouched. The row is lazily
/// created on first save. Does not navigate anywhere; clients may save
/// repeatedly in one session.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<UpdateSiteConfig>,
) -> AppResult<Json<SiteConfigView>> {
    let row = SiteConfigRepo::update(&state.pool, &input).await?;
    tracing::info!("Site config updated");
    Ok(Json(SiteConfigView::from_row(row)))
}

/// Request body for `POST /admin/site-config/carousel`.
#[derive(Debug, Deserialize)]
pub struct AddCarouselImage {
    pub url: String,
}

/// POST /api/v1/admin/site-config/carousel
///
/// Append an image URL to the hero carousel. Blank input is rejected
/// before it reaches the list.
pub async fn add_carousel_image(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<AddCarouselImage>,
) -> AppResult<Json<SiteConfigView>> {
    let url = input.url.trim();
    if url.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Carousel image URL cannot be blank".into(),
        )));
    }

    let mut view = load_view(&state.pool).await?;
    view.hero.carousel_images.push(url.to_string());

    let row = SiteConfigRepo::update(&state.pool, &carousel_update(view.hero.carousel_images))
        .await?;
    Ok(Json(SiteConfigView::from_row(row)))
}

/// DELETE /api/v1/admin/site-config/carousel/{index}
///
/// Remove a carousel image by positional index, preserving the order of
/// the remaining items. Out-of-range indexes are a 404. Positional
/// removal assumes a single editor; concurrent edits are last-write-wins.
pub async fn remove_carousel_image(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(index): Path<usize>,
) -> AppResult<Json<SiteConfigView>> {
    let mut view = load_view(&state.pool).await?;

    if index >= view.hero.carousel_images.len() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CarouselImage",
            id: index.to_string(),
        }));
    }
    view.hero.carousel_images.remove(index);

    let row = SiteConfigRepo::update(&state.pool, &carousel_update(view.hero.carousel_images))
        .await?;
    Ok(Json(SiteConfigView::from_row(row)))
}

/// Build a merge update that only replaces the carousel list.
fn carousel_update(images: Vec<String>) -> UpdateSiteConfig {
    UpdateSiteConfig {
        hero: UpdateHeroConfig {
            carousel_images: Some(images),
            ..Default::default()
        },
        ..Default::default()
    }
}
