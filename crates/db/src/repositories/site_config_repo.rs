//! Repository for the `site_config` singleton.

use sqlx::PgPool;

use crate::models::site_config::{SiteConfigRow, UpdateSiteConfig, SITE_CONFIG_ID};

const COLUMNS: &str = "id, hero_static_image, hero_static_image_mobile, hero_carousel_images, \
                       about_bio, about_image_light, about_image_dark, about_video_url, updated_at";

/// Provides get/update operations for the single site-configuration row.
pub struct SiteConfigRepo;

impl SiteConfigRepo {
    /// Fetch the singleton row. `None` means it has never been saved;
    /// callers apply defaults.
    pub async fn get(pool: &PgPool) -> Result<Option<SiteConfigRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_config WHERE id = $1");
        sqlx::query_as::<_, SiteConfigRow>(&query)
            .bind(SITE_CONFIG_ID)
            .fetch_optional(pool)
            .await
    }

    /// Merge-upsert: lazily creates the row on first save; fields absent
    /// from `input` leave the stored values untouched.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateSiteConfig,
    ) -> Result<SiteConfigRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_config
                (id, hero_static_image, hero_static_image_mobile, hero_carousel_images,
                 about_bio, about_image_light, about_image_dark, about_video_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (id) DO UPDATE SET
                hero_static_image = COALESCE(EXCLUDED.hero_static_image, site_config.hero_static_image),
                hero_static_image_mobile = COALESCE(EXCLUDED.hero_static_image_mobile, site_config.hero_static_image_mobile),
                hero_carousel_images = COALESCE(EXCLUDED.hero_carousel_images, site_config.hero_carousel_images),
                about_bio = COALESCE(EXCLUDED.about_bio, site_config.about_bio),
                about_image_light = COALESCE(EXCLUDED.about_image_light, site_config.about_image_light),
                about_image_dark = COALESCE(EXCLUDED.about_image_dark, site_config.about_image_dark),
                about_video_url = COALESCE(EXCLUDED.about_video_url, site_config.about_video_url),
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteConfigRow>(&query)
            .bind(SITE_CONFIG_ID)
            .bind(&input.hero.static_image)
            .bind(&input.hero.static_image_mobile)
            .bind(&input.hero.carousel_images)
            .bind(&input.about.bio)
            .bind(&input.about.image_light)
            .bind(&input.about.image_dark)
            .bind(&input.about.video_url)
            .fetch_one(pool)
            .await
    }
}
