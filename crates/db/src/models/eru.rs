//! ERU owner and Emergency Response Unit models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, EnumId, Timestamp};
use validator::Validate;

use super::country::MiniCountry;
use super::event::ListEvent;

/// A row from the `eru_owners` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EruOwner {
    pub id: DbId,
    pub national_society_country_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `erus` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Eru {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub eru_type: EnumId,
    pub units: i32,
    pub equipment_units: i32,
    pub deployed_to_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub eru_owner_id: DbId,
    pub available: bool,
}

/// ERU as listed inside its owner's `eru_set`.
#[derive(Debug, Clone, Serialize)]
pub struct EruSetItem {
    #[serde(flatten)]
    pub eru: Eru,
    pub deployed_to: Option<MiniCountry>,
    pub event: Option<ListEvent>,
}

/// Owner with its national society and units expanded.
#[derive(Debug, Clone, Serialize)]
pub struct EruOwnerDetail {
    #[serde(flatten)]
    pub owner: EruOwner,
    pub national_society_country: Option<MiniCountry>,
    pub eru_set: Vec<EruSetItem>,
}

/// ERU with deployment target, event and owner expanded.
#[derive(Debug, Clone, Serialize)]
pub struct EruDetail {
    #[serde(flatten)]
    pub eru: Eru,
    pub deployed_to: Option<MiniCountry>,
    pub event: Option<ListEvent>,
    pub eru_owner: Option<EruOwnerDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEruOwner {
    pub national_society_country_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEruOwner {
    pub national_society_country_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEru {
    #[serde(rename = "type")]
    pub eru_type: EnumId,
    #[validate(range(min = 0))]
    pub units: Option<i32>,
    #[validate(range(min = 0))]
    pub equipment_units: Option<i32>,
    pub deployed_to_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub eru_owner_id: DbId,
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEru {
    #[serde(rename = "type")]
    pub eru_type: Option<EnumId>,
    #[validate(range(min = 0))]
    pub units: Option<i32>,
    #[validate(range(min = 0))]
    pub equipment_units: Option<i32>,
    pub deployed_to_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub eru_owner_id: Option<DbId>,
    pub available: Option<bool>,
}

/// Query parameters for `GET /erus`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EruListParams {
    pub owner: Option<DbId>,
    pub available: Option<bool>,
    pub deployed_to: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
