//! Handlers for `/events`.
//!
//! Reads are public; writes require the `editor` role.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::enums::{ensure_valid_opt, AlertLevel};
use go_core::error::CoreError;
use go_core::types::DbId;
use go_core::validation::validate_input;
use go_db::models::appeal::{Appeal, AppealListParams};
use go_db::models::event::{CreateEvent, Event, EventListParams, UpdateEvent};
use go_db::models::field_report::{FieldReport, FieldReportListParams};
use go_db::repositories::{AppealRepo, EventRepo, FieldReportRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::{page, PaginationParams};
use crate::response::DataResponse;
use crate::state::AppState;

async fn ensure_event_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Event> {
    EventRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))
}

/// GET /api/v1/events
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> AppResult<Json<DataResponse<Vec<Event>>>> {
    let (limit, offset) = page(params.limit, params.offset);
    let events = EventRepo::list(&state.pool, &params, limit, offset).await?;
    Ok(Json(DataResponse { data: events }))
}

/// POST /api/v1/events
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<DataResponse<Event>>)> {
    validate_input(&input)?;
    ensure_valid_opt::<AlertLevel>(input.alert_level)?;

    let event = EventRepo::create(&state.pool, &input).await?;
    tracing::info!(event_id = event.id, user_id = user.user_id, "Event created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Event>>> {
    let event = ensure_event_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: event }))
}

/// PUT /api/v1/events/{id}
///
/// `countries`, when present, replaces the whole country set.
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<DataResponse<Event>>> {
    validate_input(&input)?;
    ensure_valid_opt::<AlertLevel>(input.alert_level)?;

    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(DataResponse { data: event }))
}

/// DELETE /api/v1/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if EventRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Event", id }))
    }
}

/// GET /api/v1/events/{id}/appeals
pub async fn list_appeals(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<Appeal>>>> {
    ensure_event_exists(&state.pool, id).await?;
    let (limit, offset) = pagination.clamped();
    let params = AppealListParams {
        event: Some(id),
        ..Default::default()
    };
    let appeals = AppealRepo::list(&state.pool, &params, limit, offset).await?;
    Ok(Json(DataResponse { data: appeals }))
}

/// GET /api/v1/events/{id}/field-reports
pub async fn list_field_reports(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<FieldReport>>>> {
    ensure_event_exists(&state.pool, id).await?;
    let (limit, offset) = pagination.clamped();
    let params = FieldReportListParams {
        event: Some(id),
        ..Default::default()
    };
    let reports = FieldReportRepo::list(&state.pool, &params, limit, offset).await?;
    Ok(Json(DataResponse { data: reports }))
}
