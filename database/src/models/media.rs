use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An image or video attachment belonging to exactly one property.
/// Listed in `order_index` order; at most one row per property carries
/// `is_featured = true`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Media {
    pub id: Uuid,
    pub property_id: Uuid,
    pub url: String,
    pub media_type: String,
    pub order_index: i32,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

pub const MEDIA_TYPES: &[&str] = &["image", "video"];

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMediaInput {
    pub url: String,
    pub media_type: String,
    #[serde(default)]
    pub is_featured: bool,
}

/// One entry of a media reorder request.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaOrderUpdate {
    pub id: Uuid,
    pub order_index: i32,
}
