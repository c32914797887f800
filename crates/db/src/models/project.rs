//! 3W project model ("who does what where") and DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, EnumId, Timestamp};
use validator::Validate;

use super::country::MiniCountry;
use super::district::MiniDistrict;
use super::regional_project::RegionalProject;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub user_id: DbId,
    pub reporting_ns_id: DbId,
    pub project_district_id: DbId,
    pub name: String,
    pub regional_project_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub dtype_id: Option<DbId>,
    pub programme_type: EnumId,
    pub primary_sector: EnumId,
    pub operation_type: EnumId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget_amount: Decimal,
    pub status: EnumId,
    pub target_total: i32,
    pub reached_total: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub project_district_detail: Option<MiniDistrict>,
    pub reporting_ns_detail: Option<MiniCountry>,
    pub regional_project_detail: Option<RegionalProject>,
}

/// Create body. The owning user is taken from the auth token.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    pub reporting_ns_id: DbId,
    pub project_district_id: DbId,
    #[validate(length(min = 1))]
    pub name: String,
    pub regional_project_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub dtype_id: Option<DbId>,
    pub programme_type: Option<EnumId>,
    pub primary_sector: Option<EnumId>,
    pub operation_type: Option<EnumId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget_amount: Option<Decimal>,
    pub status: Option<EnumId>,
    #[validate(range(min = 0))]
    pub target_total: Option<i32>,
    #[validate(range(min = 0))]
    pub reached_total: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProject {
    pub reporting_ns_id: Option<DbId>,
    pub project_district_id: Option<DbId>,
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub regional_project_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub dtype_id: Option<DbId>,
    pub programme_type: Option<EnumId>,
    pub primary_sector: Option<EnumId>,
    pub operation_type: Option<EnumId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget_amount: Option<Decimal>,
    pub status: Option<EnumId>,
    #[validate(range(min = 0))]
    pub target_total: Option<i32>,
    #[validate(range(min = 0))]
    pub reached_total: Option<i32>,
}

/// Query parameters for `GET /projects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListParams {
    pub reporting_ns: Option<DbId>,
    /// Country of the project district.
    pub country: Option<DbId>,
    pub regional_project: Option<DbId>,
    pub status: Option<EnumId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
