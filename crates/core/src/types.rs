use serde::{Deserialize, Serialize};

/// Auth-related primary keys (users, sessions) are PostgreSQL BIGSERIAL.
/// Workshops use their slug as the primary key and are keyed by `String`.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Content category of a workshop record.
///
/// Serialized in lowercase Spanish to match the stored documents
/// (`"taller"` for group workshops, `"sesion"` for individual sessions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Taller,
    Sesion,
}

impl Category {
    /// The stored string form, matching the `category` column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Taller => "taller",
            Category::Sesion => "sesion",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "taller" => Ok(Category::Taller),
            "sesion" => Ok(Category::Sesion),
            other => Err(crate::error::CoreError::Validation(format!(
                "Unknown category: {other}"
            ))),
        }
    }
}
