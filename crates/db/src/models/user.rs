//! Admin user entity model and DTOs.

use serde::Serialize;
use sitio_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A user row from the `users` table.
///
/// The password hash is never serialized into API responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. The hash must already be computed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}
