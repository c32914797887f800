//! Handlers for `/per/phases`.

use axum::extract::{Path, State};
use axum::Json;
use go_core::enums::{ensure_valid, ProcessPhase};
use go_core::types::DbId;
use go_db::models::ns_phase::{NsPhase, UpsertNsPhase};
use go_db::repositories::NsPhaseRepo;

use crate::error::AppResult;
use crate::handlers::country::ensure_country_exists;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/per/phases
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<NsPhase>>>> {
    let phases = NsPhaseRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: phases }))
}

/// PUT /api/v1/per/phases/{country_id}
///
/// Sets the phase of a National Society, creating its row on first use.
pub async fn upsert(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(country_id): Path<DbId>,
    Json(input): Json<UpsertNsPhase>,
) -> AppResult<Json<DataResponse<NsPhase>>> {
    ensure_valid::<ProcessPhase>(input.phase)?;
    ensure_country_exists(&state.pool, country_id).await?;

    let phase = NsPhaseRepo::upsert(&state.pool, country_id, input.phase).await?;
    tracing::info!(country_id, phase = input.phase, user_id = user.user_id, "NS phase set");
    Ok(Json(DataResponse { data: phase }))
}
