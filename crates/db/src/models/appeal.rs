//! Appeal model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, EnumId, Timestamp};
use validator::Validate;

/// A row from the `appeals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appeal {
    pub id: DbId,
    pub aid: String,
    pub name: String,
    pub dtype_id: Option<DbId>,
    pub atype: EnumId,
    pub status: EnumId,
    pub code: Option<String>,
    pub sector: String,
    pub num_beneficiaries: i32,
    pub amount_requested: Decimal,
    pub amount_funded: Decimal,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub event_id: Option<DbId>,
    pub country_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAppeal {
    #[validate(length(min = 1, max = 20))]
    pub aid: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub dtype_id: Option<DbId>,
    /// Defaults to 0 (DREF) if omitted.
    pub atype: Option<EnumId>,
    /// Defaults to 0 (Ongoing) if omitted.
    pub status: Option<EnumId>,
    pub code: Option<String>,
    pub sector: Option<String>,
    pub num_beneficiaries: Option<i32>,
    pub amount_requested: Option<Decimal>,
    pub amount_funded: Option<Decimal>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub event_id: Option<DbId>,
    pub country_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAppeal {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub dtype_id: Option<DbId>,
    pub atype: Option<EnumId>,
    pub status: Option<EnumId>,
    pub code: Option<String>,
    pub sector: Option<String>,
    pub num_beneficiaries: Option<i32>,
    pub amount_requested: Option<Decimal>,
    pub amount_funded: Option<Decimal>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub event_id: Option<DbId>,
    pub country_id: Option<DbId>,
}

/// Query parameters for `GET /appeals`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppealListParams {
    pub status: Option<EnumId>,
    pub atype: Option<EnumId>,
    pub country: Option<DbId>,
    pub event: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
