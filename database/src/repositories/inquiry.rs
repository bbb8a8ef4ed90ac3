use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    CreateInquiryInput, Inquiry, InquiryStatus, PaginatedResult, Pagination,
};

pub struct InquiryRepository {
    pool: PgPool,
}

impl InquiryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &CreateInquiryInput) -> Result<Inquiry> {
        sqlx::query_as::<_, Inquiry>(
            r#"
            INSERT INTO inquiries (property_id, name, email, phone, message, status)
            VALUES ($1, $2, $3, $4, $5, 'new')
            RETURNING *
            "#,
        )
        .bind(input.property_id)
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.message)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create inquiry")
    }

    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<Inquiry>> {
        sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to find inquiry")
    }

    /// Newest-first admin listing, optionally narrowed to one status.
    pub async fn list(
        &self,
        status: Option<InquiryStatus>,
        pagination: &Pagination,
    ) -> Result<PaginatedResult<Inquiry>> {
        let (total, items) = match status {
            Some(status) => {
                let total: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM inquiries WHERE status = $1")
                        .bind(status.as_str())
                        .fetch_one(&self.pool)
                        .await
                        .context("Failed to count inquiries")?;

                let items = sqlx::query_as::<_, Inquiry>(
                    "SELECT * FROM inquiries WHERE status = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
                )
                .bind(status.as_str())
                .bind(pagination.limit)
                .bind(pagination.offset)
                .fetch_all(&self.pool)
                .await
                .context("Failed to list inquiries")?;

                (total, items)
            }
            None => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inquiries")
                    .fetch_one(&self.pool)
                    .await
                    .context("Failed to count inquiries")?;

                let items = sqlx::query_as::<_, Inquiry>(
                    "SELECT * FROM inquiries ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(pagination.limit)
                .bind(pagination.offset)
                .fetch_all(&self.pool)
                .await
                .context("Failed to list inquiries")?;

                (total, items)
            }
        };

        Ok(PaginatedResult::new(items, total, pagination))
    }

    pub async fn set_status(&self, id: &Uuid, status: InquiryStatus) -> Result<Option<Inquiry>> {
        sqlx::query_as::<_, Inquiry>(
            r#"
            UPDATE inquiries
            SET status = $1, updated_at = CURRENT_TIMESTAMP
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(status.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update inquiry status")
    }
}
