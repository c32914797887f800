use serde::Serialize;
use sqlx::FromRow;
use go_core::types::{DbId, Timestamp};

/// Databank snapshot for a country, filled by the ingestion sources.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CountryOverview {
    pub id: DbId,
    pub country_id: DbId,
    /// Alert list written by the START Network source; `None` until the
    /// first run finds data for the country.
    pub start_network_data: Option<serde_json::Value>,
    pub updated_at: Timestamp,
}
