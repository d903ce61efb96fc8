//! Handler for the one-time legacy seed migration.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sitio_core::error::CoreError;
use sitio_db::repositories::WorkshopRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::seed;
use crate::state::AppState;

/// Response body for a completed migration.
#[derive(Debug, Serialize)]
pub struct MigrationReport {
    pub created: usize,
    pub total: usize,
}

/// POST /api/v1/admin/workshops/migrate
///
/// Bulk-load the legacy seed list into the live collection. Gated
/// server-side on an empty collection: re-running against existing data
/// would duplicate records, so a non-empty collection is a 409.
///
/// On a mid-run failure the earlier creates are not rolled back; the
/// error message reports how many records were committed.
pub async fn migrate(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<MigrationReport>> {
    let existing = WorkshopRepo::count(&state.pool).await?;
    if existing > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Migration requires an empty collection; found {existing} existing workshops"
        ))));
    }

    match seed::run(&state.pool).await {
        Ok(total) => {
            tracing::info!(user_id = user.user_id, total, "Seed migration completed");
            Ok(Json(MigrationReport {
                created: total,
                total,
            }))
        }
        Err(failure) => Err(AppError::MigrationAborted {
            created: failure.created,
            total: failure.total,
            source: failure.error,
        }),
    }
}
