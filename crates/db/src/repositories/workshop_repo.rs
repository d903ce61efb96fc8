//! Repository for the `workshops` table.

use sqlx::PgPool;

use crate::models::workshop::{CreateWorkshop, UpdateWorkshop, Workshop};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, short_description, full_description, ideal_for, \
                       image, category, cta_link, created_at, updated_at";

/// Provides CRUD operations for workshops, keyed by slug.
pub struct WorkshopRepo;

impl WorkshopRepo {
    /// Insert a new workshop under the given slug, returning the created row.
    ///
    /// A duplicate slug surfaces as a unique-constraint database error.
    pub async fn create(
        pool: &PgPool,
        id: &str,
        input: &CreateWorkshop,
    ) -> Result<Workshop, sqlx::Error> {
        let query = format!(
            "INSERT INTO workshops
                (id, title, short_description, full_description, ideal_for, image, category, cta_link)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workshop>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.short_description)
            .bind(&input.full_description)
            .bind(&input.ideal_for)
            .bind(&input.image)
            .bind(input.category.as_str())
            .bind(&input.cta_link)
            .fetch_one(pool)
            .await
    }

    /// Find a workshop by its slug.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Workshop>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workshops WHERE id = $1");
        sqlx::query_as::<_, Workshop>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all workshops, oldest first. Full-collection fetch; the
    /// catalog is small enough that pagination buys nothing.
    pub async fn list(pool: &PgPool) -> Result<Vec<Workshop>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workshops ORDER BY created_at, id");
        sqlx::query_as::<_, Workshop>(&query).fetch_all(pool).await
    }

    /// Update a workshop. Only fields present in `input` are applied.
    /// `cta_link` is nullable, so it carries a presence flag instead of
    /// COALESCE; a present `null` clears the stored link.
    ///
    /// Returns `None` if no row with the given slug exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateWorkshop,
    ) -> Result<Option<Workshop>, sqlx::Error> {
        let query = format!(
            "UPDATE workshops SET
                title = COALESCE($2, title),
                short_description = COALESCE($3, short_description),
                full_description = COALESCE($4, full_description),
                ideal_for = COALESCE($5, ideal_for),
                image = COALESCE($6, image),
                category = COALESCE($7, category),
                cta_link = CASE WHEN $8 THEN $9 ELSE cta_link END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Workshop>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.short_description)
            .bind(&input.full_description)
            .bind(&input.ideal_for)
            .bind(&input.image)
            .bind(input.category.map(|c| c.as_str()))
            .bind(input.cta_link.is_some())
            .bind(input.cta_link.clone().flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a workshop by slug. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workshops WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all workshops. Used by the seed-migration emptiness gate.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM workshops")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
