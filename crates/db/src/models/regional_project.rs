use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `regional_projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RegionalProject {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRegionalProject {
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRegionalProject {
    #[validate(length(min = 1))]
    pub name: Option<String>,
}
