//! Disaster event model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, EnumId, Timestamp};
use validator::Validate;

/// A row from the `events` table with its affected country ids.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub dtype_id: Option<DbId>,
    pub summary: String,
    pub disaster_start_date: Option<Timestamp>,
    pub num_affected: Option<i32>,
    pub alert_level: EnumId,
    pub glide: String,
    pub auto_generated: bool,
    pub is_featured: bool,
    pub countries: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Compact event shape embedded in appeals, ERUs and deployments.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq)]
pub struct ListEvent {
    pub id: DbId,
    pub name: String,
    pub dtype_id: Option<DbId>,
    pub glide: String,
    pub disaster_start_date: Option<Timestamp>,
    pub countries: Vec<DbId>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEvent {
    #[validate(length(min = 1))]
    pub name: String,
    pub dtype_id: Option<DbId>,
    pub summary: Option<String>,
    pub disaster_start_date: Option<Timestamp>,
    pub num_affected: Option<i32>,
    /// Defaults to 0 (Green) if omitted.
    pub alert_level: Option<EnumId>,
    #[validate(length(max = 18))]
    pub glide: Option<String>,
    pub auto_generated: Option<bool>,
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub countries: Vec<DbId>,
}

/// All fields optional. `countries`, when present, replaces the full set.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEvent {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub dtype_id: Option<DbId>,
    pub summary: Option<String>,
    pub disaster_start_date: Option<Timestamp>,
    pub num_affected: Option<i32>,
    pub alert_level: Option<EnumId>,
    #[validate(length(max = 18))]
    pub glide: Option<String>,
    pub auto_generated: Option<bool>,
    pub is_featured: Option<bool>,
    pub countries: Option<Vec<DbId>>,
}

/// Query parameters for `GET /events`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventListParams {
    pub country: Option<DbId>,
    pub dtype: Option<DbId>,
    pub is_featured: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
