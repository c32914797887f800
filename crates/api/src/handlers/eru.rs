//! Handlers for `/eru-owners` and `/erus`.
//!
//! Owners are served with their full `eru_set`; every ERU is served with
//! its deployment country, event and owner expanded.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::enums::{ensure_valid, ensure_valid_opt, EruType};
use go_core::error::CoreError;
use go_core::types::DbId;
use go_core::validation::validate_input;
use go_db::models::eru::{
    CreateEru, CreateEruOwner, EruDetail, EruListParams, EruOwnerDetail, UpdateEru,
    UpdateEruOwner,
};
use go_db::repositories::{EruOwnerRepo, EruRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::expand::{eru_details, eru_owner_details, single};
use crate::middleware::rbac::RequireEditor;
use crate::query::{page, PaginationParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// ERU owners
// ---------------------------------------------------------------------------

/// GET /api/v1/eru-owners
pub async fn list_owners(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<EruOwnerDetail>>>> {
    let (limit, offset) = pagination.clamped();
    let owners = EruOwnerRepo::list(&state.pool, limit, offset).await?;
    let details = eru_owner_details(&state.pool, owners).await?;
    Ok(Json(DataResponse { data: details }))
}

/// POST /api/v1/eru-owners
///
/// A national society owns at most one ERU owner record.
pub async fn create_owner(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(input): Json<CreateEruOwner>,
) -> AppResult<(StatusCode, Json<DataResponse<EruOwnerDetail>>)> {
    let owner = EruOwnerRepo::create(&state.pool, &input).await?;
    let detail = single(eru_owner_details(&state.pool, vec![owner]).await?)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/eru-owners/{id}
pub async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EruOwnerDetail>>> {
    let owner = EruOwnerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EruOwner",
            id,
        }))?;
    let detail = single(eru_owner_details(&state.pool, vec![owner]).await?)?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/eru-owners/{id}
pub async fn update_owner(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEruOwner>,
) -> AppResult<Json<DataResponse<EruOwnerDetail>>> {
    let owner = EruOwnerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EruOwner",
            id,
        }))?;
    let detail = single(eru_owner_details(&state.pool, vec![owner]).await?)?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /api/v1/eru-owners/{id}
///
/// Deletes the owner's ERUs with it.
pub async fn delete_owner(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if EruOwnerRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "EruOwner",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// ERUs
// ---------------------------------------------------------------------------

/// GET /api/v1/erus
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<EruListParams>,
) -> AppResult<Json<DataResponse<Vec<EruDetail>>>> {
    let (limit, offset) = page(params.limit, params.offset);
    let erus = EruRepo::list(&state.pool, &params, limit, offset).await?;
    let details = eru_details(&state.pool, erus).await?;
    Ok(Json(DataResponse { data: details }))
}

/// POST /api/v1/erus
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Json(input): Json<CreateEru>,
) -> AppResult<(StatusCode, Json<DataResponse<EruDetail>>)> {
    validate_input(&input)?;
    ensure_valid::<EruType>(input.eru_type)?;

    let eru = EruRepo::create(&state.pool, &input).await?;
    tracing::info!(eru_id = eru.id, owner_id = eru.eru_owner_id, "ERU created");
    let detail = single(eru_details(&state.pool, vec![eru]).await?)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/erus/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EruDetail>>> {
    let eru = EruRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Eru", id }))?;
    let detail = single(eru_details(&state.pool, vec![eru]).await?)?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/erus/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEru>,
) -> AppResult<Json<DataResponse<EruDetail>>> {
    validate_input(&input)?;
    ensure_valid_opt::<EruType>(input.eru_type)?;

    let eru = EruRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Eru", id }))?;
    let detail = single(eru_details(&state.pool, vec![eru]).await?)?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /api/v1/erus/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if EruRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Eru", id }))
    }
}
