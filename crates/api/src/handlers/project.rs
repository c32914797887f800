//! Handlers for `/projects` (3W: who does what where).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::enums::{ensure_valid_opt, OperationType, ProgrammeType, ProjectStatus, Sector};
use go_core::error::CoreError;
use go_core::types::{DbId, EnumId};
use go_core::validation::{validate_date_range, validate_input};
use go_db::models::project::{
    CreateProject, ProjectDetail, ProjectListParams, UpdateProject,
};
use go_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::expand::{project_details, single};
use crate::middleware::rbac::RequireEditor;
use crate::query::page;
use crate::response::DataResponse;
use crate::state::AppState;

/// Enum-coded columns shared by the create and update bodies.
fn validate_codes(
    programme_type: Option<EnumId>,
    primary_sector: Option<EnumId>,
    operation_type: Option<EnumId>,
    status: Option<EnumId>,
) -> Result<(), CoreError> {
    ensure_valid_opt::<ProgrammeType>(programme_type)?;
    ensure_valid_opt::<Sector>(primary_sector)?;
    ensure_valid_opt::<OperationType>(operation_type)?;
    ensure_valid_opt::<ProjectStatus>(status)
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<DataResponse<Vec<ProjectDetail>>>> {
    ensure_valid_opt::<ProjectStatus>(params.status)?;
    let (limit, offset) = page(params.limit, params.offset);
    let projects = ProjectRepo::list(&state.pool, &params, limit, offset).await?;
    let details = project_details(&state.pool, projects).await?;
    Ok(Json(DataResponse { data: details }))
}

/// POST /api/v1/projects
///
/// The project is owned by the caller.
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectDetail>>)> {
    validate_input(&input)?;
    validate_codes(
        input.programme_type,
        input.primary_sector,
        input.operation_type,
        input.status,
    )?;
    validate_date_range(input.start_date.as_ref(), input.end_date.as_ref())?;

    let project = ProjectRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(project_id = project.id, user_id = user.user_id, "Project created");
    let detail = single(project_details(&state.pool, vec![project]).await?)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Project", id }))?;
    let detail = single(project_details(&state.pool, vec![project]).await?)?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    validate_input(&input)?;
    validate_codes(
        input.programme_type,
        input.primary_sector,
        input.operation_type,
        input.status,
    )?;
    validate_date_range(input.start_date.as_ref(), input.end_date.as_ref())?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Project", id }))?;
    let detail = single(project_details(&state.pool, vec![project]).await?)?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Project", id }))
    }
}
