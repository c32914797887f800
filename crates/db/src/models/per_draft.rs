use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, Timestamp};
use validator::Validate;

/// A saved, not yet submitted PER form. `data` is opaque client state.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Draft {
    pub id: DbId,
    pub code: String,
    pub user_id: Option<DbId>,
    pub data: Option<String>,
    pub country_id: Option<DbId>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDraft {
    #[validate(length(min = 1, max = 10))]
    pub code: String,
    pub data: Option<String>,
    pub country_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftListParams {
    pub country: Option<DbId>,
    pub code: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
