//! Route definitions for the `/cron-jobs` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::cron_job;
use crate::state::AppState;

/// Routes mounted at `/cron-jobs`. Admin only.
///
/// ```text
/// GET    /       -> list (?name=)
/// POST   /run    -> run (synchronous ingestion)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cron_job::list))
        .route("/run", post(cron_job::run))
}
