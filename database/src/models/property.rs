use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::media::Media;

/// A property listing row.
///
/// Categorical columns (`status`, `category`, `property_type`, ...) are
/// stored as TEXT; the closed enumerations for them live in
/// [`super::filters`] where the allow-list validation happens.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: String,
    pub category: String,
    pub property_type: String,
    pub sub_type: Option<String>,
    pub furnished_status: Option<String>,
    pub parking: Option<String>,
    pub facing: Option<String>,
    pub price: i64,
    pub area: i64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub address: Option<String>,
    pub city: Option<String>,
    pub locality: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A property together with its ordered media attachments.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyWithMedia {
    #[serde(flatten)]
    pub property: Property,
    pub media: Vec<Media>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePropertyInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
    pub category: String,
    pub property_type: String,
    pub sub_type: Option<String>,
    pub furnished_status: Option<String>,
    pub parking: Option<String>,
    pub facing: Option<String>,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub area: i64,
    #[serde(default)]
    pub bedrooms: i32,
    #[serde(default)]
    pub bathrooms: i32,
    pub address: Option<String>,
    pub city: Option<String>,
    pub locality: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePropertyInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub property_type: Option<String>,
    pub sub_type: Option<String>,
    pub furnished_status: Option<String>,
    pub parking: Option<String>,
    pub facing: Option<String>,
    pub price: Option<i64>,
    pub area: Option<i64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub locality: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
