//! Handlers for `/cron-jobs`: the databank ingestion log.

use axum::extract::{Query, State};
use axum::Json;
use go_db::models::cron_job::{CronJob, CronJobListParams};
use go_db::repositories::CronJobRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::page;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/cron-jobs
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<CronJobListParams>,
) -> AppResult<Json<DataResponse<Vec<CronJob>>>> {
    let (limit, offset) = page(params.limit, params.offset);
    let jobs = CronJobRepo::list(&state.pool, params.name.as_deref(), limit, offset).await?;
    Ok(Json(DataResponse { data: jobs }))
}

/// POST /api/v1/cron-jobs/run
///
/// Runs every source synchronously and returns the cron job rows the run
/// recorded. Waits for a background run already in progress.
pub async fn run(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<CronJob>>>> {
    tracing::info!(user_id = admin.user_id, "Databank ingestion triggered");
    let run = state
        .ingestor
        .run_once()
        .await
        .map_err(|e| AppError::InternalError(format!("Ingestion failed: {e}")))?;
    tracing::info!(summary = ?run.summary, "Databank ingestion finished");

    Ok(Json(DataResponse { data: run.jobs }))
}
