//! Handlers for `/disaster-types`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::error::CoreError;
use go_core::types::DbId;
use go_core::validation::require_non_blank;
use go_db::models::disaster_type::{CreateDisasterType, DisasterType, UpdateDisasterType};
use go_db::repositories::DisasterTypeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/disaster-types
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<DisasterType>>>> {
    let types = DisasterTypeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: types }))
}

/// POST /api/v1/disaster-types
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateDisasterType>,
) -> AppResult<(StatusCode, Json<DataResponse<DisasterType>>)> {
    require_non_blank("name", &input.name)?;
    let dtype = DisasterTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: dtype })))
}

/// GET /api/v1/disaster-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DisasterType>>> {
    let dtype = DisasterTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DisasterType",
            id,
        }))?;
    Ok(Json(DataResponse { data: dtype }))
}

/// PUT /api/v1/disaster-types/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDisasterType>,
) -> AppResult<Json<DataResponse<DisasterType>>> {
    let dtype = DisasterTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DisasterType",
            id,
        }))?;
    Ok(Json(DataResponse { data: dtype }))
}

/// DELETE /api/v1/disaster-types/{id}
///
/// Events, appeals and field reports referencing the type keep existing
/// with their `dtype_id` cleared.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DisasterTypeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "DisasterType",
            id,
        }))
    }
}
