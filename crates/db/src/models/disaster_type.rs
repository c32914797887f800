//! Disaster type lookup model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::DbId;

/// A row from the `disaster_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DisasterType {
    pub id: DbId,
    pub name: String,
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDisasterType {
    pub name: String,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDisasterType {
    pub name: Option<String>,
    pub summary: Option<String>,
}
