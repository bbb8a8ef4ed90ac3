use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A point of interest near a property, with its distance in meters.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NearbyFacility {
    pub id: Uuid,
    pub property_id: Uuid,
    pub name: String,
    pub facility_type: String,
    pub distance_m: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}

pub const FACILITY_TYPES: &[&str] = &[
    "school", "hospital", "metro", "market", "park", "airport", "other",
];

/// Facility create request. The stored distance is derived from, in
/// priority order: `distance_m`, `distance_text`, or the Haversine
/// distance between the facility and property coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFacilityInput {
    pub name: String,
    pub facility_type: String,
    pub distance_m: Option<i32>,
    pub distance_text: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
