use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{AdminUser, CreateAdminUserInput};

pub struct AdminUserRepository {
    pool: PgPool,
}

impl AdminUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>> {
        sqlx::query_as::<_, AdminUser>("SELECT * FROM admin_users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to find admin user by email")
    }

    pub async fn create(&self, input: &CreateAdminUserInput) -> Result<AdminUser> {
        sqlx::query_as::<_, AdminUser>(
            r#"
            INSERT INTO admin_users (email, password_hash, name)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.name)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create admin user")
    }

    pub async fn touch_last_login(&self, id: &Uuid) -> Result<()> {
        sqlx::query("UPDATE admin_users SET last_login_at = CURRENT_TIMESTAMP WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to update last login")?;

        Ok(())
    }
}
