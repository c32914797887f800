//! Partner society activities and deployments.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, Timestamp};
use validator::Validate;

use super::country::MiniCountry;
use super::district::MiniDistrict;

/// A row from the `partner_society_activities` table.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq)]
pub struct PartnerSocietyActivity {
    pub id: DbId,
    pub activity: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePartnerSocietyActivity {
    #[validate(length(min = 1))]
    pub activity: String,
}

/// A row from `partner_society_deployments` with its district ids.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PartnerSocietyDeployment {
    pub id: DbId,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub name: String,
    pub role: String,
    pub parent_society_id: Option<DbId>,
    pub country_deployed_to_id: Option<DbId>,
    pub activity_id: Option<DbId>,
    pub district_deployed_to: Vec<DbId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartnerSocietyDeploymentDetail {
    #[serde(flatten)]
    pub deployment: PartnerSocietyDeploymentBase,
    pub parent_society: Option<MiniCountry>,
    pub country_deployed_to: Option<MiniCountry>,
    pub district_deployed_to: Vec<MiniDistrict>,
    pub activity: Option<PartnerSocietyActivity>,
}

/// Deployment columns without the district id list, which the detail
/// view replaces with expanded districts.
#[derive(Debug, Clone, Serialize)]
pub struct PartnerSocietyDeploymentBase {
    pub id: DbId,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub name: String,
    pub role: String,
    pub parent_society_id: Option<DbId>,
    pub country_deployed_to_id: Option<DbId>,
    pub activity_id: Option<DbId>,
}

impl From<PartnerSocietyDeployment> for PartnerSocietyDeploymentBase {
    fn from(d: PartnerSocietyDeployment) -> Self {
        Self {
            id: d.id,
            start_date: d.start_date,
            end_date: d.end_date,
            name: d.name,
            role: d.role,
            parent_society_id: d.parent_society_id,
            country_deployed_to_id: d.country_deployed_to_id,
            activity_id: d.activity_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePartnerSocietyDeployment {
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    #[validate(length(min = 1))]
    pub name: String,
    pub role: Option<String>,
    pub parent_society_id: Option<DbId>,
    pub country_deployed_to_id: Option<DbId>,
    pub activity_id: Option<DbId>,
    #[serde(default)]
    pub district_deployed_to: Vec<DbId>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePartnerSocietyDeployment {
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub role: Option<String>,
    pub parent_society_id: Option<DbId>,
    pub country_deployed_to_id: Option<DbId>,
    pub activity_id: Option<DbId>,
    pub district_deployed_to: Option<Vec<DbId>>,
}

/// Query parameters for `GET /partner-deployments`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartnerDeploymentListParams {
    /// Country deployed to.
    pub country: Option<DbId>,
    /// Parent (sending) society.
    pub parent: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
