// Data access layer for the estate listing platform
// Provides a repository-pattern interface over PostgreSQL for all property,
// media, facility, inquiry and admin-user operations.

pub mod config;
pub mod models;
pub mod repositories;
pub mod utils;

// Re-export commonly used items
pub use chrono;
pub use config::DatabaseConfig;
pub use sqlx;
pub use uuid;

use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Database connection manager
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database instance from configuration
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.database_url)
            .await
            .context("Failed to connect to database")?;

        tracing::debug!(
            max_connections = config.max_connections,
            "database pool initialized"
        );

        Ok(Self { pool })
    }

    /// Get the underlying connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run migrations")?;
        Ok(())
    }
}
