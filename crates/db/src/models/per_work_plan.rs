use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, EnumId, Timestamp};
use validator::Validate;

/// A PER work plan action line.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkPlan {
    pub id: DbId,
    pub prioritization: EnumId,
    pub components: Option<String>,
    pub benchmark: Option<String>,
    pub actions: Option<String>,
    pub comments: Option<String>,
    pub timeline: Timestamp,
    pub status: EnumId,
    pub support_required: bool,
    pub focal_point: Option<String>,
    pub country_id: Option<DbId>,
    pub code: Option<String>,
    pub question_id: Option<String>,
    pub user_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkPlan {
    pub prioritization: EnumId,
    #[validate(length(max = 900))]
    pub components: Option<String>,
    #[validate(length(max = 900))]
    pub benchmark: Option<String>,
    #[validate(length(max = 900))]
    pub actions: Option<String>,
    #[validate(length(max = 900))]
    pub comments: Option<String>,
    pub timeline: Timestamp,
    pub status: EnumId,
    pub support_required: Option<bool>,
    #[validate(length(max = 90))]
    pub focal_point: Option<String>,
    pub country_id: Option<DbId>,
    #[validate(length(max = 10))]
    pub code: Option<String>,
    #[validate(length(max = 10))]
    pub question_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateWorkPlan {
    pub prioritization: Option<EnumId>,
    #[validate(length(max = 900))]
    pub components: Option<String>,
    #[validate(length(max = 900))]
    pub benchmark: Option<String>,
    #[validate(length(max = 900))]
    pub actions: Option<String>,
    #[validate(length(max = 900))]
    pub comments: Option<String>,
    pub timeline: Option<Timestamp>,
    pub status: Option<EnumId>,
    pub support_required: Option<bool>,
    #[validate(length(max = 90))]
    pub focal_point: Option<String>,
    pub country_id: Option<DbId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkPlanListParams {
    pub country: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
