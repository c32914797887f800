//! Handlers for `/per/overviews`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::enums::{ensure_valid_opt, AssessmentType};
use go_core::error::CoreError;
use go_core::types::{DbId, EnumId};
use go_core::validation::validate_input;
use go_db::models::per_overview::{CreateOverview, Overview, OverviewListParams, UpdateOverview};
use go_db::repositories::OverviewRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::query::page;
use crate::response::DataResponse;
use crate::state::AppState;

fn validate_assessment_types(current: Option<EnumId>, last: Option<EnumId>) -> Result<(), CoreError> {
    ensure_valid_opt::<AssessmentType>(current)?;
    ensure_valid_opt::<AssessmentType>(last)
}

pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<OverviewListParams>,
) -> AppResult<Json<DataResponse<Vec<Overview>>>> {
    let (limit, offset) = page(params.limit, params.offset);
    let overviews = OverviewRepo::list(&state.pool, &params, limit, offset).await?;
    Ok(Json(DataResponse { data: overviews }))
}

pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateOverview>,
) -> AppResult<(StatusCode, Json<DataResponse<Overview>>)> {
    validate_input(&input)?;
    validate_assessment_types(
        input.type_of_capacity_assessment,
        input.type_of_last_capacity_assessment,
    )?;

    let overview = OverviewRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: overview })))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Overview>>> {
    let overview = OverviewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Overview", id }))?;
    Ok(Json(DataResponse { data: overview }))
}

pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOverview>,
) -> AppResult<Json<DataResponse<Overview>>> {
    validate_input(&input)?;
    validate_assessment_types(
        input.type_of_capacity_assessment,
        input.type_of_last_capacity_assessment,
    )?;

    let overview = OverviewRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Overview", id }))?;
    Ok(Json(DataResponse { data: overview }))
}

pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if OverviewRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Overview", id }))
    }
}
