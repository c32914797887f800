//! Handlers for `/per/forms`.
//!
//! A form is a header row plus one answer per catalog question. Answers
//! are keyed by `question_id` and upserted, so re-submitting a question
//! replaces the earlier answer. Finalized forms are read-only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::enums::{ensure_valid, ensure_valid_opt, FormStatus, Language};
use go_core::error::CoreError;
use go_core::per_catalog::{is_known_area, lookup, question_details};
use go_core::types::DbId;
use go_core::validation::{validate_input, validate_ip_address};
use go_db::models::per_form::{
    CreateForm, Form, FormAnswer, FormDataView, FormDetail, FormListParams, UpdateForm,
    UpsertFormData,
};
use go_db::repositories::{FormDataRepo, FormRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::query::page;
use crate::response::DataResponse;
use crate::state::AppState;

fn validate_answers(code: &str, answers: &[FormAnswer]) -> Result<(), CoreError> {
    for answer in answers {
        ensure_valid::<FormStatus>(answer.selected_option)?;
        let key = format!("{code}{}", answer.question_id);
        if lookup(&key).is_none() {
            return Err(CoreError::Validation(format!(
                "Unknown question '{}' for form '{code}'",
                answer.question_id
            )));
        }
    }
    Ok(())
}

async fn load_form(pool: &sqlx::PgPool, id: DbId) -> AppResult<Form> {
    FormRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Form", id }))
}

fn finalized_conflict(id: DbId) -> AppError {
    AppError::Core(CoreError::Conflict(format!("Form {id} is finalized")))
}

fn ensure_open(form: &Form) -> AppResult<()> {
    if form.finalized {
        return Err(finalized_conflict(form.id));
    }
    Ok(())
}

async fn form_data(pool: &sqlx::PgPool, form: &Form) -> AppResult<Vec<FormDataView>> {
    let rows = FormDataRepo::list_by_form(pool, form.id).await?;
    Ok(rows
        .into_iter()
        .map(|data| FormDataView {
            question: question_details(&data.question_id, &form.code),
            data,
        })
        .collect())
}

async fn detail(pool: &sqlx::PgPool, form: Form) -> AppResult<FormDetail> {
    let data = form_data(pool, &form).await?;
    Ok(FormDetail { form, data })
}

/// GET /api/v1/per/forms
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<FormListParams>,
) -> AppResult<Json<DataResponse<Vec<Form>>>> {
    let (limit, offset) = page(params.limit, params.offset);
    let forms = FormRepo::list(&state.pool, &params, limit, offset).await?;
    Ok(Json(DataResponse { data: forms }))
}

/// POST /api/v1/per/forms
///
/// Creates the header and its initial answers in one transaction.
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateForm>,
) -> AppResult<(StatusCode, Json<DataResponse<FormDetail>>)> {
    validate_input(&input)?;
    if !is_known_area(&input.code) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown PER form code '{}'",
            input.code
        ))));
    }
    ensure_valid::<Language>(input.language)?;
    if let Some(ip) = input.ip_address.as_deref() {
        validate_ip_address(ip)?;
    }
    validate_answers(&input.code, &input.data)?;

    let form = FormRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(
        form_id = form.id,
        code = %form.code,
        answers = input.data.len(),
        user_id = user.user_id,
        "PER form created",
    );
    let detail = detail(&state.pool, form).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /api/v1/per/forms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FormDetail>>> {
    let form = load_form(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: detail(&state.pool, form).await?,
    }))
}

/// PUT /api/v1/per/forms/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateForm>,
) -> AppResult<Json<DataResponse<Form>>> {
    validate_input(&input)?;
    ensure_valid_opt::<Language>(input.language)?;
    if let Some(ip) = input.ip_address.as_deref() {
        validate_ip_address(ip)?;
    }

    ensure_open(&load_form(&state.pool, id).await?)?;
    let form = FormRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| finalized_conflict(id))?;
    Ok(Json(DataResponse { data: form }))
}

/// DELETE /api/v1/per/forms/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FormRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Form", id }))
    }
}

/// GET /api/v1/per/forms/{id}/data
pub async fn list_data(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<FormDataView>>>> {
    let form = load_form(&state.pool, id).await?;
    let data = form_data(&state.pool, &form).await?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/per/forms/{id}/data
///
/// Returns the full answer set after the upsert.
pub async fn upsert_data(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertFormData>,
) -> AppResult<Json<DataResponse<Vec<FormDataView>>>> {
    validate_input(&input)?;
    let form = load_form(&state.pool, id).await?;
    ensure_open(&form)?;
    validate_answers(&form.code, &input.data)?;

    FormDataRepo::upsert_many(&state.pool, form.id, &input.data).await?;
    let data = form_data(&state.pool, &form).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/per/forms/{id}/finalize
///
/// Finalizing twice keeps the first submission time.
pub async fn finalize(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Form>>> {
    let form = FormRepo::finalize(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Form", id }))?;
    tracing::info!(form_id = id, user_id = user.user_id, "PER form finalized");
    Ok(Json(DataResponse { data: form }))
}
