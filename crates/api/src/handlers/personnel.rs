//! Handlers for `/personnel-deployments` and `/personnel`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::enums::{ensure_valid_opt, validate_personnel_type, Region};
use go_core::error::CoreError;
use go_core::types::DbId;
use go_core::validation::{validate_date_range, validate_input};
use go_db::models::personnel::{
    CreatePersonnel, CreatePersonnelDeployment, PersonnelDeploymentDetail, PersonnelDetail,
    PersonnelListParams, UpdatePersonnel, UpdatePersonnelDeployment,
};
use go_db::repositories::{PersonnelDeploymentRepo, PersonnelRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::expand::{personnel_deployment_details, personnel_details, single};
use crate::middleware::rbac::RequireEditor;
use crate::query::{page, PaginationParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Deployments
// ---------------------------------------------------------------------------

/// GET /api/v1/personnel-deployments
pub async fn list_deployments(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<PersonnelDeploymentDetail>>>> {
    let (limit, offset) = pagination.clamped();
    let deployments = PersonnelDeploymentRepo::list(&state.pool, limit, offset).await?;
    let details = personnel_deployment_details(&state.pool, deployments).await?;
    Ok(Json(DataResponse { data: details }))
}

/// POST /api/v1/personnel-deployments
pub async fn create_deployment(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(input): Json<CreatePersonnelDeployment>,
) -> AppResult<(StatusCode, Json<DataResponse<PersonnelDeploymentDetail>>)> {
    ensure_valid_opt::<Region>(input.region_deployed_to)?;
    let deployment = PersonnelDeploymentRepo::create(&state.pool, &input).await?;
    let detail = single(personnel_deployment_details(&state.pool, vec![deployment]).await?)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/personnel-deployments/{id}
pub async fn get_deployment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PersonnelDeploymentDetail>>> {
    let deployment = PersonnelDeploymentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PersonnelDeployment",
            id,
        }))?;
    let detail = single(personnel_deployment_details(&state.pool, vec![deployment]).await?)?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/personnel-deployments/{id}
pub async fn update_deployment(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePersonnelDeployment>,
) -> AppResult<Json<DataResponse<PersonnelDeploymentDetail>>> {
    ensure_valid_opt::<Region>(input.region_deployed_to)?;
    let deployment = PersonnelDeploymentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PersonnelDeployment",
            id,
        }))?;
    let detail = single(personnel_deployment_details(&state.pool, vec![deployment]).await?)?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /api/v1/personnel-deployments/{id}
///
/// Personnel attached to the deployment are deleted with it.
pub async fn delete_deployment(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PersonnelDeploymentRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PersonnelDeployment",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Personnel
// ---------------------------------------------------------------------------

/// GET /api/v1/personnel
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PersonnelListParams>,
) -> AppResult<Json<DataResponse<Vec<PersonnelDetail>>>> {
    let (limit, offset) = page(params.limit, params.offset);
    let personnel = PersonnelRepo::list(&state.pool, &params, limit, offset).await?;
    let details = personnel_details(&state.pool, personnel).await?;
    Ok(Json(DataResponse { data: details }))
}

/// POST /api/v1/personnel
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(input): Json<CreatePersonnel>,
) -> AppResult<(StatusCode, Json<DataResponse<PersonnelDetail>>)> {
    validate_input(&input)?;
    validate_personnel_type(&input.personnel_type)?;
    validate_date_range(input.start_date.as_ref(), input.end_date.as_ref())?;

    let person = PersonnelRepo::create(&state.pool, &input).await?;
    let detail = single(personnel_details(&state.pool, vec![person]).await?)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/personnel/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PersonnelDetail>>> {
    let person = PersonnelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Personnel",
            id,
        }))?;
    let detail = single(personnel_details(&state.pool, vec![person]).await?)?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/personnel/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePersonnel>,
) -> AppResult<Json<DataResponse<PersonnelDetail>>> {
    validate_input(&input)?;
    if let Some(kind) = &input.personnel_type {
        validate_personnel_type(kind)?;
    }
    validate_date_range(input.start_date.as_ref(), input.end_date.as_ref())?;

    let person = PersonnelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Personnel",
            id,
        }))?;
    let detail = single(personnel_details(&state.pool, vec![person]).await?)?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /api/v1/personnel/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PersonnelRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Personnel",
            id,
        }))
    }
}
