use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateMediaInput, Media, MediaOrderUpdate};

pub struct MediaRepository {
    pool: PgPool,
}

impl MediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_property(&self, property_id: &Uuid) -> Result<Vec<Media>> {
        sqlx::query_as::<_, Media>(
            "SELECT * FROM property_media WHERE property_id = $1 ORDER BY order_index ASC",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list property media")
    }

    /// Append a media item after the property's current highest order
    /// index. When the item is created featured, any previously featured
    /// item for the same property is unfeatured in the same transaction.
    pub async fn create(&self, property_id: &Uuid, input: &CreateMediaInput) -> Result<Media> {
        let mut tx = self.pool.begin().await.context("Failed to begin transaction")?;

        if input.is_featured {
            sqlx::query("UPDATE property_media SET is_featured = FALSE WHERE property_id = $1")
                .bind(property_id)
                .execute(&mut *tx)
                .await
                .context("Failed to clear featured media")?;
        }

        let media = sqlx::query_as::<_, Media>(
            r#"
            INSERT INTO property_media (property_id, url, media_type, order_index, is_featured)
            VALUES (
                $1, $2, $3,
                (SELECT COALESCE(MAX(order_index), -1) + 1 FROM property_media WHERE property_id = $1),
                $4
            )
            RETURNING *
            "#,
        )
        .bind(property_id)
        .bind(&input.url)
        .bind(&input.media_type)
        .bind(input.is_featured)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to create media")?;

        tx.commit().await.context("Failed to commit transaction")?;
        Ok(media)
    }

    /// Mark one media item featured, clearing the flag on its siblings so
    /// a property never carries more than one featured item.
    pub async fn set_featured(&self, media_id: &Uuid) -> Result<Option<Media>> {
        let mut tx = self.pool.begin().await.context("Failed to begin transaction")?;

        let media = sqlx::query_as::<_, Media>("SELECT * FROM property_media WHERE id = $1")
            .bind(media_id)
            .fetch_optional(&mut *tx)
            .await
            .context("Failed to find media")?;

        let Some(media) = media else {
            return Ok(None);
        };

        sqlx::query("UPDATE property_media SET is_featured = FALSE WHERE property_id = $1")
            .bind(media.property_id)
            .execute(&mut *tx)
            .await
            .context("Failed to clear featured media")?;

        let updated = sqlx::query_as::<_, Media>(
            "UPDATE property_media SET is_featured = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(media_id)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to set featured media")?;

        tx.commit().await.context("Failed to commit transaction")?;
        Ok(Some(updated))
    }

    /// Apply a batch of order-index updates atomically.
    pub async fn reorder(&self, updates: &[MediaOrderUpdate]) -> Result<()> {
        let mut tx = self.pool.begin().await.context("Failed to begin transaction")?;

        for update in updates {
            sqlx::query("UPDATE property_media SET order_index = $1 WHERE id = $2")
                .bind(update.order_index)
                .bind(update.id)
                .execute(&mut *tx)
                .await
                .context("Failed to reorder media")?;
        }

        tx.commit().await.context("Failed to commit transaction")?;
        Ok(())
    }

    pub async fn delete(&self, id: &Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM property_media WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete media")?;

        Ok(result.rows_affected() > 0)
    }
}
