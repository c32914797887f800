//! Country model, its compact projection, and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, EnumId, Timestamp};
use validator::Validate;

/// A row from the `countries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Country {
    pub id: DbId,
    pub name: String,
    pub iso: Option<String>,
    pub iso3: Option<String>,
    pub society_name: String,
    pub society_url: String,
    pub region: Option<EnumId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Compact country shape embedded in other resources.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq)]
pub struct MiniCountry {
    pub id: DbId,
    pub name: String,
    pub iso: Option<String>,
    pub society_name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCountry {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(equal = 2))]
    pub iso: Option<String>,
    #[validate(length(equal = 3))]
    pub iso3: Option<String>,
    pub society_name: Option<String>,
    pub society_url: Option<String>,
    pub region: Option<EnumId>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCountry {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(equal = 2))]
    pub iso: Option<String>,
    #[validate(length(equal = 3))]
    pub iso3: Option<String>,
    pub society_name: Option<String>,
    pub society_url: Option<String>,
    pub region: Option<EnumId>,
}

/// Query parameters for `GET /countries`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryListParams {
    pub region: Option<EnumId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
