//! Handlers for `/partner-activities` and `/partner-deployments`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::error::CoreError;
use go_core::types::DbId;
use go_core::validation::{validate_date_range, validate_input};
use go_db::models::partner_deployment::{
    CreatePartnerSocietyActivity, CreatePartnerSocietyDeployment, PartnerDeploymentListParams,
    PartnerSocietyActivity, PartnerSocietyDeploymentDetail, UpdatePartnerSocietyDeployment,
};
use go_db::repositories::{PartnerActivityRepo, PartnerDeploymentRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::expand::{partner_deployment_details, single};
use crate::middleware::rbac::RequireEditor;
use crate::query::page;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/partner-activities
pub async fn list_activities(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PartnerSocietyActivity>>>> {
    let activities = PartnerActivityRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: activities }))
}

/// POST /api/v1/partner-activities
pub async fn create_activity(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(input): Json<CreatePartnerSocietyActivity>,
) -> AppResult<(StatusCode, Json<DataResponse<PartnerSocietyActivity>>)> {
    validate_input(&input)?;
    let activity = PartnerActivityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: activity })))
}

/// GET /api/v1/partner-deployments
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PartnerDeploymentListParams>,
) -> AppResult<Json<DataResponse<Vec<PartnerSocietyDeploymentDetail>>>> {
    let (limit, offset) = page(params.limit, params.offset);
    let deployments = PartnerDeploymentRepo::list(&state.pool, &params, limit, offset).await?;
    let details = partner_deployment_details(&state.pool, deployments).await?;
    Ok(Json(DataResponse { data: details }))
}

/// POST /api/v1/partner-deployments
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(input): Json<CreatePartnerSocietyDeployment>,
) -> AppResult<(StatusCode, Json<DataResponse<PartnerSocietyDeploymentDetail>>)> {
    validate_input(&input)?;
    validate_date_range(input.start_date.as_ref(), input.end_date.as_ref())?;

    let deployment = PartnerDeploymentRepo::create(&state.pool, &input).await?;
    let detail = single(partner_deployment_details(&state.pool, vec![deployment]).await?)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/partner-deployments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PartnerSocietyDeploymentDetail>>> {
    let deployment = PartnerDeploymentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PartnerSocietyDeployment",
            id,
        }))?;
    let detail = single(partner_deployment_details(&state.pool, vec![deployment]).await?)?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/partner-deployments/{id}
///
/// `district_deployed_to`, when present, replaces the whole district set.
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePartnerSocietyDeployment>,
) -> AppResult<Json<DataResponse<PartnerSocietyDeploymentDetail>>> {
    validate_input(&input)?;
    validate_date_range(input.start_date.as_ref(), input.end_date.as_ref())?;

    let deployment = PartnerDeploymentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PartnerSocietyDeployment",
            id,
        }))?;
    let detail = single(partner_deployment_details(&state.pool, vec![deployment]).await?)?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /api/v1/partner-deployments/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PartnerDeploymentRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PartnerSocietyDeployment",
            id,
        }))
    }
}
