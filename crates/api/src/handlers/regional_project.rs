//! Handlers for `/regional-projects`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::error::CoreError;
use go_core::types::DbId;
use go_core::validation::validate_input;
use go_db::models::regional_project::{
    CreateRegionalProject, RegionalProject, UpdateRegionalProject,
};
use go_db::repositories::RegionalProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<RegionalProject>>>> {
    let (limit, offset) = pagination.clamped();
    let projects = RegionalProjectRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: projects }))
}

pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(input): Json<CreateRegionalProject>,
) -> AppResult<(StatusCode, Json<DataResponse<RegionalProject>>)> {
    validate_input(&input)?;
    let project = RegionalProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<RegionalProject>>> {
    let project = RegionalProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RegionalProject",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRegionalProject>,
) -> AppResult<Json<DataResponse<RegionalProject>>> {
    validate_input(&input)?;
    let project = RegionalProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RegionalProject",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// Projects pointing at the regional project keep existing with the link cleared.
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if RegionalProjectRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "RegionalProject",
            id,
        }))
    }
}
