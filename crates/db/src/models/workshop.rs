//! Workshop entity model and DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use sitio_core::types::{Category, Timestamp};
use sqlx::FromRow;

/// A workshop row from the `workshops` table.
///
/// `full_description` and `ideal_for` are always ordered sequences; the
/// schema enforces the array shape on write, so no read-side
/// normalization is needed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Workshop {
    /// Canonical slug identifier (e.g. `dar-voz-a-tu-verdad`).
    pub id: String,
    pub title: String,
    pub short_description: String,
    pub full_description: Vec<String>,
    pub ideal_for: Vec<String>,
    pub image: String,
    pub category: String,
    pub cta_link: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new workshop.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkshop {
    /// Slug identifier. When omitted, derived from the title.
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_description: Vec<String>,
    #[serde(default)]
    pub ideal_for: Vec<String>,
    #[serde(default)]
    pub image: String,
    pub category: Category,
    pub cta_link: Option<String>,
}

/// DTO for updating an existing workshop. All fields are optional;
/// absent fields leave the stored value untouched.
///
/// `cta_link` is the one nullable column, so it needs the extra level:
/// absent means keep, an explicit JSON `null` means clear.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWorkshop {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<Vec<String>>,
    pub ideal_for: Option<Vec<String>>,
    pub image: Option<String>,
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "double_option")]
    pub cta_link: Option<Option<String>>,
}

/// Deserialize a present field (including `null`) as `Some`, so the
/// outer `Option` tracks field presence and the inner one nullability.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
