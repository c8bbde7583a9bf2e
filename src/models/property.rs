use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const STATUS_AVAILABLE: &str = "Available";
pub const STATUS_OCCUPIED: &str = "Occupied";

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub rent: i64,
    pub contact: String,
    pub area: String,
    pub place: String,
    pub amenities: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
