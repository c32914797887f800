//! Field report model, its actions-taken children, and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, EnumId, Timestamp};
use validator::Validate;

/// A row from the `field_reports` table with its country ids.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FieldReport {
    pub id: DbId,
    pub rid: Option<String>,
    pub summary: String,
    pub description: String,
    pub dtype_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub status: EnumId,
    pub request_assistance: bool,
    pub num_injured: Option<i32>,
    pub num_dead: Option<i32>,
    pub num_missing: Option<i32>,
    pub num_affected: Option<i32>,
    pub num_displaced: Option<i32>,
    pub num_assisted: Option<i32>,
    pub num_localstaff: Option<i32>,
    pub num_volunteers: Option<i32>,
    pub num_expats_delegates: Option<i32>,
    pub user_id: Option<DbId>,
    pub countries: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `actions_taken` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActionsTaken {
    pub id: DbId,
    pub field_report_id: DbId,
    pub organization: String,
    pub actions: Vec<String>,
    pub summary: String,
}

/// Field report with its actions, as returned by the detail endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct FieldReportDetail {
    #[serde(flatten)]
    pub report: FieldReport,
    pub actions_taken: Vec<ActionsTaken>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateActionsTaken {
    pub organization: String,
    #[serde(default)]
    pub actions: Vec<String>,
    pub summary: Option<String>,
}

/// Casualty and response counters shared by create and update bodies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldReportCounts {
    pub num_injured: Option<i32>,
    pub num_dead: Option<i32>,
    pub num_missing: Option<i32>,
    pub num_affected: Option<i32>,
    pub num_displaced: Option<i32>,
    pub num_assisted: Option<i32>,
    pub num_localstaff: Option<i32>,
    pub num_volunteers: Option<i32>,
    pub num_expats_delegates: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFieldReport {
    pub rid: Option<String>,
    #[validate(length(min = 1))]
    pub summary: String,
    pub description: Option<String>,
    pub dtype_id: Option<DbId>,
    pub event_id: Option<DbId>,
    /// Defaults to 1 (Event) if omitted.
    pub status: Option<EnumId>,
    pub request_assistance: Option<bool>,
    #[serde(flatten)]
    pub counts: FieldReportCounts,
    #[serde(default)]
    pub countries: Vec<DbId>,
    #[serde(default)]
    pub actions_taken: Vec<CreateActionsTaken>,
}

/// All fields optional. `countries`, when present, replaces the full set.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFieldReport {
    pub rid: Option<String>,
    #[validate(length(min = 1))]
    pub summary: Option<String>,
    pub description: Option<String>,
    pub dtype_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub status: Option<EnumId>,
    pub request_assistance: Option<bool>,
    #[serde(flatten)]
    pub counts: FieldReportCounts,
    pub countries: Option<Vec<DbId>>,
}

/// Query parameters for `GET /field-reports`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldReportListParams {
    pub event: Option<DbId>,
    pub country: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
