use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, EnumId, Timestamp};

/// Current PER process phase of a National Society. One row per country.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NsPhase {
    pub id: DbId,
    pub country_id: DbId,
    pub phase: EnumId,
    pub updated_at: Timestamp,
}

/// Body of `PUT /per/phases/{country_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertNsPhase {
    pub phase: EnumId,
}
