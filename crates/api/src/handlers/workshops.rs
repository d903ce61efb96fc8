//! Handlers for the workshop catalog: public reads and guarded admin CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sitio_core::error::CoreError;
use sitio_core::text::slugify;
use sitio_db::models::workshop::{CreateWorkshop, UpdateWorkshop, Workshop};
use sitio_db::repositories::WorkshopRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Look up a workshop or produce a 404.
async fn find_or_not_found(pool: &sqlx::PgPool, id: &str) -> AppResult<Workshop> {
    WorkshopRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Workshop",
                id: id.to_string(),
            })
        })
}

// ---------------------------------------------------------------------------
// Public reads
// ---------------------------------------------------------------------------

/// GET /api/v1/workshops
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Workshop>>> {
    let workshops = WorkshopRepo::list(&state.pool).await?;
    Ok(Json(workshops))
}

/// GET /api/v1/workshops/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Workshop>> {
    let workshop = find_or_not_found(&state.pool, &id).await?;
    Ok(Json(workshop))
}

// ---------------------------------------------------------------------------
// Admin CRUD (guarded)
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/workshops
pub async fn admin_list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Vec<Workshop>>> {
    let workshops = WorkshopRepo::list(&state.pool).await?;
    Ok(Json(workshops))
}

/// GET /api/v1/admin/workshops/{id}
///
/// Direct single-record fetch; the editor no longer scans a full listing
/// to find one record.
pub async fn admin_get(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<Workshop>> {
    let workshop = find_or_not_found(&state.pool, &id).await?;
    Ok(Json(workshop))
}

/// POST /api/v1/admin/workshops
///
/// The slug is the canonical identifier, derived from the explicit id
/// when one is given and from the title otherwise. Both paths go
/// through `slugify`, so an id like `"Dar Voz"` stores as `dar-voz`.
/// A duplicate slug is a 409.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateWorkshop>,
) -> AppResult<(StatusCode, Json<Workshop>)> {
    let slug = slugify(input.id.as_deref().unwrap_or(&input.title));
    if slug.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Workshop id cannot be empty; provide an id or a non-empty title".into(),
        )));
    }

    let workshop = WorkshopRepo::create(&state.pool, &slug, &input).await?;
    tracing::info!(slug = %workshop.id, "Workshop created");
    Ok((StatusCode::CREATED, Json(workshop)))
}

/// PUT /api/v1/admin/workshops/{id}
///
/// Partial merge: absent fields keep their stored values. Updating a
/// missing slug is a distinct 404, not a generic store error.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(input): Json<UpdateWorkshop>,
) -> AppResult<Json<Workshop>> {
    let workshop = WorkshopRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Workshop",
                id: id.clone(),
            })
        })?;
    tracing::info!(slug = %workshop.id, "Workshop updated");
    Ok(Json(workshop))
}

/// DELETE /api/v1/admin/workshops/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = WorkshopRepo::delete(&state.pool, &id).await?;
    if deleted {
        tracing::info!(slug = %id, "Workshop deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Workshop",
            id,
        }))
    }
}
