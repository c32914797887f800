//! District (administrative level 1) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::DbId;

/// A row from the `districts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct District {
    pub id: DbId,
    pub name: String,
    pub code: String,
    pub country_id: Option<DbId>,
}

/// Compact district shape embedded in deployments and projects.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq)]
pub struct MiniDistrict {
    pub id: DbId,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDistrict {
    pub name: String,
    pub code: Option<String>,
    pub country_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDistrict {
    pub name: Option<String>,
    pub code: Option<String>,
    pub country_id: Option<DbId>,
}

/// Query parameters for `GET /districts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DistrictListParams {
    pub country: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
