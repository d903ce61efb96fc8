//! Site configuration singleton model and DTOs.
//!
//! Stored flat (one column per field) but exposed to clients in the
//! nested `{ hero, about }` document shape the site has always used.

use serde::{Deserialize, Serialize};
use sitio_core::types::Timestamp;
use sqlx::FromRow;

/// Fixed key of the singleton row.
pub const SITE_CONFIG_ID: &str = "main";

/// The `site_config` row. Columns are nullable because the row is
/// lazily created on first save; readers apply defaults via
/// [`SiteConfigView::from_row`].
#[derive(Debug, Clone, FromRow)]
pub struct SiteConfigRow {
    pub id: String,
    pub hero_static_image: Option<String>,
    pub hero_static_image_mobile: Option<String>,
    pub hero_carousel_images: Option<Vec<String>>,
    pub about_bio: Option<String>,
    pub about_image_light: Option<String>,
    pub about_image_dark: Option<String>,
    pub about_video_url: Option<String>,
    pub updated_at: Timestamp,
}

/// Hero section of the client-facing config document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroConfig {
    pub static_image: String,
    pub static_image_mobile: String,
    pub carousel_images: Vec<String>,
}

/// About section of the client-facing config document.
///
/// `bio` is a single string; embedded line breaks are paragraph
/// separators at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutConfig {
    pub bio: String,
    pub image_light: String,
    pub image_dark: String,
    pub video_url: String,
}

/// Client-facing site configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfigView {
    pub hero: HeroConfig,
    pub about: AboutConfig,
}

impl SiteConfigView {
    /// Merge a stored row over built-in defaults. Fields never written
    /// fall back to their default, so older stored documents missing
    /// newer fields are always readable.
    pub fn from_row(row: SiteConfigRow) -> Self {
        Self {
            hero: HeroConfig {
                static_image: row.hero_static_image.unwrap_or_default(),
                static_image_mobile: row.hero_static_image_mobile.unwrap_or_default(),
                carousel_images: row.hero_carousel_images.unwrap_or_default(),
            },
            about: AboutConfig {
                bio: row.about_bio.unwrap_or_default(),
                image_light: row.about_image_light.unwrap_or_default(),
                image_dark: row.about_image_dark.unwrap_or_default(),
                video_url: row.about_video_url.unwrap_or_default(),
            },
        }
    }
}

/// Partial update of the hero section. Absent fields are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHeroConfig {
    pub static_image: Option<String>,
    pub static_image_mobile: Option<String>,
    pub carousel_images: Option<Vec<String>>,
}

/// Partial update of the about section. Absent fields are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAboutConfig {
    pub bio: Option<String>,
    pub image_light: Option<String>,
    pub image_dark: Option<String>,
    pub video_url: Option<String>,
}

/// Merge-upsert DTO: only the provided fields overwrite stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSiteConfig {
    #[serde(default)]
    pub hero: UpdateHeroConfig,
    #[serde(default)]
    pub about: UpdateAboutConfig,
}
