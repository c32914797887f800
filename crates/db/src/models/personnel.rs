//! Personnel deployment and deployed personnel models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, EnumId, Timestamp};
use validator::Validate;

use super::country::MiniCountry;
use super::event::ListEvent;

/// A row from the `personnel_deployments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PersonnelDeployment {
    pub id: DbId,
    pub country_deployed_to_id: Option<DbId>,
    pub region_deployed_to: Option<EnumId>,
    pub event_deployed_to_id: Option<DbId>,
    pub comments: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonnelDeploymentDetail {
    #[serde(flatten)]
    pub deployment: PersonnelDeployment,
    pub country_deployed_to: Option<MiniCountry>,
    pub event_deployed_to: Option<ListEvent>,
}

/// A row from the `personnel` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Personnel {
    pub id: DbId,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub name: String,
    pub role: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub personnel_type: String,
    pub country_from_id: Option<DbId>,
    pub deployment_id: DbId,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonnelDetail {
    #[serde(flatten)]
    pub personnel: Personnel,
    pub country_from: Option<MiniCountry>,
    pub deployment: Option<PersonnelDeploymentDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePersonnelDeployment {
    pub country_deployed_to_id: Option<DbId>,
    pub region_deployed_to: Option<EnumId>,
    pub event_deployed_to_id: Option<DbId>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePersonnelDeployment {
    pub country_deployed_to_id: Option<DbId>,
    pub region_deployed_to: Option<EnumId>,
    pub event_deployed_to_id: Option<DbId>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePersonnel {
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    #[validate(length(min = 1))]
    pub name: String,
    pub role: Option<String>,
    #[serde(rename = "type")]
    pub personnel_type: String,
    pub country_from_id: Option<DbId>,
    pub deployment_id: DbId,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePersonnel {
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "type")]
    pub personnel_type: Option<String>,
    pub country_from_id: Option<DbId>,
    pub deployment_id: Option<DbId>,
}

/// Query parameters for `GET /personnel`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonnelListParams {
    pub deployment: Option<DbId>,
    #[serde(rename = "type")]
    pub personnel_type: Option<String>,
    pub country_from: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
