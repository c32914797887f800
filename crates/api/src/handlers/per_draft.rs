//! Handlers for `/per/drafts`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::error::CoreError;
use go_core::per_catalog::is_known_area;
use go_core::types::DbId;
use go_core::validation::validate_input;
use go_db::models::per_draft::{CreateDraft, Draft, DraftListParams};
use go_db::repositories::DraftRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::query::page;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/per/drafts
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<DraftListParams>,
) -> AppResult<Json<DataResponse<Vec<Draft>>>> {
    let (limit, offset) = page(params.limit, params.offset);
    let drafts = DraftRepo::list(&state.pool, &params, limit, offset).await?;
    Ok(Json(DataResponse { data: drafts }))
}

/// POST /api/v1/per/drafts
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateDraft>,
) -> AppResult<(StatusCode, Json<DataResponse<Draft>>)> {
    validate_input(&input)?;
    if !is_known_area(&input.code) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown PER form code '{}'",
            input.code
        ))));
    }

    let draft = DraftRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: draft })))
}

/// DELETE /api/v1/per/drafts/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DraftRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Draft", id }))
    }
}
