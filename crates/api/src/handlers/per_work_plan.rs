//! Handlers for `/per/work-plans`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::enums::{ensure_valid, ensure_valid_opt, PriorityValue, WorkPlanStatus};
use go_core::error::CoreError;
use go_core::types::DbId;
use go_core::validation::validate_input;
use go_db::models::per_work_plan::{CreateWorkPlan, UpdateWorkPlan, WorkPlan, WorkPlanListParams};
use go_db::repositories::WorkPlanRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::query::page;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/per/work-plans
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<WorkPlanListParams>,
) -> AppResult<Json<DataResponse<Vec<WorkPlan>>>> {
    let (limit, offset) = page(params.limit, params.offset);
    let plans = WorkPlanRepo::list(&state.pool, &params, limit, offset).await?;
    Ok(Json(DataResponse { data: plans }))
}

/// POST /api/v1/per/work-plans
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateWorkPlan>,
) -> AppResult<(StatusCode, Json<DataResponse<WorkPlan>>)> {
    validate_input(&input)?;
    ensure_valid::<PriorityValue>(input.prioritization)?;
    ensure_valid::<WorkPlanStatus>(input.status)?;

    let plan = WorkPlanRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: plan })))
}

/// GET /api/v1/per/work-plans/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<WorkPlan>>> {
    let plan = WorkPlanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "WorkPlan", id }))?;
    Ok(Json(DataResponse { data: plan }))
}

/// PUT /api/v1/per/work-plans/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWorkPlan>,
) -> AppResult<Json<DataResponse<WorkPlan>>> {
    validate_input(&input)?;
    ensure_valid_opt::<PriorityValue>(input.prioritization)?;
    ensure_valid_opt::<WorkPlanStatus>(input.status)?;

    let plan = WorkPlanRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "WorkPlan", id }))?;
    Ok(Json(DataResponse { data: plan }))
}

/// DELETE /api/v1/per/work-plans/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if WorkPlanRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "WorkPlan", id }))
    }
}
