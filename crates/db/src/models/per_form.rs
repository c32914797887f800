//! PER form header and per-question answers.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, EnumId, Timestamp};
use uuid::Uuid;
use validator::Validate;

/// Default recorded when the submitter address is unknown.
pub const DEFAULT_IP_ADDRESS: &str = "192.168.0.1";

/// A row from the `per_forms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Form {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub language: EnumId,
    pub user_id: Option<DbId>,
    pub country_id: Option<DbId>,
    pub ns: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub submitted_at: Timestamp,
    pub started_at: Timestamp,
    pub ended_at: Timestamp,
    pub finalized: bool,
    pub validated: bool,
    pub ip_address: String,
    pub unique_id: Uuid,
    pub comment: Option<String>,
}

/// A row from the `per_form_data` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FormData {
    pub id: DbId,
    pub form_id: DbId,
    pub question_id: String,
    pub selected_option: EnumId,
    pub notes: String,
}

/// Answer as served by the API, with the catalog question text attached.
#[derive(Debug, Clone, Serialize)]
pub struct FormDataView {
    #[serde(flatten)]
    pub data: FormData,
    pub question: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormDetail {
    #[serde(flatten)]
    pub form: Form,
    pub data: Vec<FormDataView>,
}

/// One answer in a create or upsert body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FormAnswer {
    #[validate(length(min = 1, max = 10))]
    pub question_id: String,
    pub selected_option: EnumId,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateForm {
    #[validate(length(min = 1, max = 10))]
    pub code: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub language: EnumId,
    pub country_id: Option<DbId>,
    #[validate(length(max = 100))]
    pub ns: Option<String>,
    pub started_at: Option<Timestamp>,
    pub ended_at: Option<Timestamp>,
    pub submitted_at: Option<Timestamp>,
    pub finalized: Option<bool>,
    pub validated: Option<bool>,
    /// Falls back to [`DEFAULT_IP_ADDRESS`].
    pub ip_address: Option<String>,
    pub comment: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub data: Vec<FormAnswer>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateForm {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub language: Option<EnumId>,
    pub country_id: Option<DbId>,
    #[validate(length(max = 100))]
    pub ns: Option<String>,
    pub started_at: Option<Timestamp>,
    pub ended_at: Option<Timestamp>,
    pub validated: Option<bool>,
    pub ip_address: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertFormData {
    #[validate(nested)]
    pub data: Vec<FormAnswer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormListParams {
    pub country: Option<DbId>,
    pub code: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
