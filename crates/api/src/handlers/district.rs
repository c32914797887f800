//! Handlers for `/districts`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use go_core::error::CoreError;
use go_core::types::DbId;
use go_core::validation::require_non_blank;
use go_db::models::district::{CreateDistrict, DistrictListParams, UpdateDistrict};
use go_db::repositories::DistrictRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::page;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/districts
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<DistrictListParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = page(params.limit, params.offset);
    let districts = DistrictRepo::list(&state.pool, params.country, limit, offset).await?;
    Ok(Json(DataResponse { data: districts }))
}

/// POST /api/v1/districts
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateDistrict>,
) -> AppResult<impl IntoResponse> {
    require_non_blank("name", &input.name)?;
    let district = DistrictRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: district })))
}

/// GET /api/v1/districts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let district = DistrictRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "District",
            id,
        }))?;
    Ok(Json(DataResponse { data: district }))
}

/// PUT /api/v1/districts/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDistrict>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        require_non_blank("name", name)?;
    }
    let district = DistrictRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "District",
            id,
        }))?;
    Ok(Json(DataResponse { data: district }))
}

/// DELETE /api/v1/districts/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DistrictRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "District",
            id,
        }))
    }
}
