//! PER overview: the cover sheet of a capacity assessment.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, EnumId, Timestamp};
use validator::Validate;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Overview {
    pub id: DbId,
    pub country_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub date_of_current_capacity_assessment: Timestamp,
    pub type_of_capacity_assessment: EnumId,
    pub date_of_last_capacity_assessment: Option<Timestamp>,
    pub type_of_last_capacity_assessment: EnumId,
    pub branch_involved: Option<String>,
    pub focal_point_name: Option<String>,
    pub focal_point_email: Option<String>,
    pub had_previous_assessment: bool,
    pub focus: Option<String>,
    pub facilitated_by: Option<String>,
    pub facilitator_email: Option<String>,
    pub phone_number: Option<String>,
    pub skype_address: Option<String>,
    pub date_of_mid_term_review: Timestamp,
    pub approximate_date_next_capacity_assmt: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOverview {
    pub country_id: Option<DbId>,
    pub date_of_current_capacity_assessment: Timestamp,
    pub type_of_capacity_assessment: Option<EnumId>,
    pub date_of_last_capacity_assessment: Option<Timestamp>,
    pub type_of_last_capacity_assessment: Option<EnumId>,
    #[validate(length(max = 90))]
    pub branch_involved: Option<String>,
    #[validate(length(max = 90))]
    pub focal_point_name: Option<String>,
    #[validate(email, length(max = 90))]
    pub focal_point_email: Option<String>,
    pub had_previous_assessment: Option<bool>,
    #[validate(length(max = 90))]
    pub focus: Option<String>,
    #[validate(length(max = 90))]
    pub facilitated_by: Option<String>,
    #[validate(email, length(max = 90))]
    pub facilitator_email: Option<String>,
    #[validate(length(max = 90))]
    pub phone_number: Option<String>,
    #[validate(length(max = 90))]
    pub skype_address: Option<String>,
    pub date_of_mid_term_review: Timestamp,
    pub approximate_date_next_capacity_assmt: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateOverview {
    pub country_id: Option<DbId>,
    pub date_of_current_capacity_assessment: Option<Timestamp>,
    pub type_of_capacity_assessment: Option<EnumId>,
    pub date_of_last_capacity_assessment: Option<Timestamp>,
    pub type_of_last_capacity_assessment: Option<EnumId>,
    #[validate(length(max = 90))]
    pub branch_involved: Option<String>,
    #[validate(length(max = 90))]
    pub focal_point_name: Option<String>,
    #[validate(email, length(max = 90))]
    pub focal_point_email: Option<String>,
    pub had_previous_assessment: Option<bool>,
    #[validate(length(max = 90))]
    pub focus: Option<String>,
    #[validate(length(max = 90))]
    pub facilitated_by: Option<String>,
    #[validate(email, length(max = 90))]
    pub facilitator_email: Option<String>,
    #[validate(length(max = 90))]
    pub phone_number: Option<String>,
    #[validate(length(max = 90))]
    pub skype_address: Option<String>,
    pub date_of_mid_term_review: Option<Timestamp>,
    pub approximate_date_next_capacity_assmt: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverviewListParams {
    pub country: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
