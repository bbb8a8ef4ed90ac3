use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateFacilityInput, NearbyFacility};

pub struct FacilityRepository {
    pool: PgPool,
}

impl FacilityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_property(&self, property_id: &Uuid) -> Result<Vec<NearbyFacility>> {
        sqlx::query_as::<_, NearbyFacility>(
            "SELECT * FROM nearby_facilities WHERE property_id = $1 ORDER BY distance_m ASC",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list nearby facilities")
    }

    /// Insert a facility with an already-resolved distance. Distance
    /// derivation (explicit value / text / Haversine) happens in the
    /// caller via [`crate::utils::resolve_distance`], which needs the
    /// property row.
    pub async fn create(
        &self,
        property_id: &Uuid,
        input: &CreateFacilityInput,
        distance_m: i32,
    ) -> Result<NearbyFacility> {
        sqlx::query_as::<_, NearbyFacility>(
            r#"
            INSERT INTO nearby_facilities (property_id, name, facility_type, distance_m, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(property_id)
        .bind(&input.name)
        .bind(&input.facility_type)
        .bind(distance_m)
        .bind(input.latitude)
        .bind(input.longitude)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create nearby facility")
    }

    pub async fn delete(&self, id: &Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM nearby_facilities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete nearby facility")?;

        Ok(result.rows_affected() > 0)
    }
}
