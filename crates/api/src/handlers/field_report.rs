//! Handlers for `/field-reports` and their actions-taken children.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::enums::{ensure_valid_opt, validate_action_org, FieldReportStatus};
use go_core::error::CoreError;
use go_core::types::DbId;
use go_core::validation::validate_input;
use go_db::models::field_report::{
    ActionsTaken, CreateActionsTaken, CreateFieldReport, FieldReport, FieldReportDetail,
    FieldReportListParams, UpdateFieldReport,
};
use go_db::repositories::FieldReportRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::page;
use crate::response::DataResponse;
use crate::state::AppState;

async fn ensure_report_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<FieldReport> {
    FieldReportRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FieldReport",
            id,
        }))
}

fn validate_actions(actions: &[CreateActionsTaken]) -> Result<(), CoreError> {
    actions
        .iter()
        .try_for_each(|a| validate_action_org(&a.organization))
}

/// GET /api/v1/field-reports
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FieldReportListParams>,
) -> AppResult<Json<DataResponse<Vec<FieldReport>>>> {
    let (limit, offset) = page(params.limit, params.offset);
    let reports = FieldReportRepo::list(&state.pool, &params, limit, offset).await?;
    Ok(Json(DataResponse { data: reports }))
}

/// POST /api/v1/field-reports
///
/// The report, its countries and its nested `actions_taken` are written in
/// one transaction. The reporting user is taken from the token.
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateFieldReport>,
) -> AppResult<(StatusCode, Json<DataResponse<FieldReportDetail>>)> {
    validate_input(&input)?;
    ensure_valid_opt::<FieldReportStatus>(input.status)?;
    validate_actions(&input.actions_taken)?;

    let report = FieldReportRepo::create(&state.pool, Some(user.user_id), &input).await?;
    let actions_taken = FieldReportRepo::list_actions(&state.pool, report.id).await?;

    tracing::info!(
        field_report_id = report.id,
        actions = actions_taken.len(),
        user_id = user.user_id,
        "Field report created"
    );
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: FieldReportDetail {
                report,
                actions_taken,
            },
        }),
    ))
}

/// GET /api/v1/field-reports/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FieldReportDetail>>> {
    let report = ensure_report_exists(&state.pool, id).await?;
    let actions_taken = FieldReportRepo::list_actions(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: FieldReportDetail {
            report,
            actions_taken,
        },
    }))
}

/// PUT /api/v1/field-reports/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFieldReport>,
) -> AppResult<Json<DataResponse<FieldReport>>> {
    validate_input(&input)?;
    ensure_valid_opt::<FieldReportStatus>(input.status)?;

    let report = FieldReportRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FieldReport",
            id,
        }))?;
    Ok(Json(DataResponse { data: report }))
}

/// DELETE /api/v1/field-reports/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FieldReportRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "FieldReport",
            id,
        }))
    }
}

/// GET /api/v1/field-reports/{id}/actions
pub async fn list_actions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ActionsTaken>>>> {
    ensure_report_exists(&state.pool, id).await?;
    let actions = FieldReportRepo::list_actions(&state.pool, id).await?;
    Ok(Json(DataResponse { data: actions }))
}

/// POST /api/v1/field-reports/{id}/actions
pub async fn add_action(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<CreateActionsTaken>,
) -> AppResult<(StatusCode, Json<DataResponse<ActionsTaken>>)> {
    validate_action_org(&input.organization)?;
    ensure_report_exists(&state.pool, id).await?;

    let action = FieldReportRepo::add_action(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: action })))
}

/// DELETE /api/v1/actions-taken/{id}
pub async fn delete_action(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FieldReportRepo::delete_action(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ActionsTaken",
            id,
        }))
    }
}
