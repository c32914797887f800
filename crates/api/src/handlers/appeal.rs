//! Handlers for `/appeals`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::enums::{ensure_valid_opt, AppealStatus, AppealType};
use go_core::error::CoreError;
use go_core::types::DbId;
use go_core::validation::{validate_date_range, validate_input};
use go_db::models::appeal::{Appeal, AppealListParams, CreateAppeal, UpdateAppeal};
use go_db::repositories::AppealRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::page;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/appeals
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AppealListParams>,
) -> AppResult<Json<DataResponse<Vec<Appeal>>>> {
    let (limit, offset) = page(params.limit, params.offset);
    let appeals = AppealRepo::list(&state.pool, &params, limit, offset).await?;
    Ok(Json(DataResponse { data: appeals }))
}

/// POST /api/v1/appeals
///
/// New appeals default to `Ongoing`, type DREF and zero amounts.
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateAppeal>,
) -> AppResult<(StatusCode, Json<DataResponse<Appeal>>)> {
    validate_input(&input)?;
    ensure_valid_opt::<AppealType>(input.atype)?;
    ensure_valid_opt::<AppealStatus>(input.status)?;
    validate_date_range(input.start_date.as_ref(), input.end_date.as_ref())?;

    let appeal = AppealRepo::create(&state.pool, &input).await?;
    tracing::info!(appeal_id = appeal.id, aid = %appeal.aid, user_id = user.user_id, "Appeal created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: appeal })))
}

/// GET /api/v1/appeals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Appeal>>> {
    let appeal = AppealRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Appeal", id }))?;
    Ok(Json(DataResponse { data: appeal }))
}

/// PUT /api/v1/appeals/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAppeal>,
) -> AppResult<Json<DataResponse<Appeal>>> {
    validate_input(&input)?;
    ensure_valid_opt::<AppealType>(input.atype)?;
    ensure_valid_opt::<AppealStatus>(input.status)?;
    validate_date_range(input.start_date.as_ref(), input.end_date.as_ref())?;

    let appeal = AppealRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Appeal", id }))?;
    Ok(Json(DataResponse { data: appeal }))
}

/// DELETE /api/v1/appeals/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if AppealRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Appeal", id }))
    }
}
