//! Handlers for `/per/documents`.
//!
//! Uploads are multipart: text fields `name`, `country`, `visibility` and
//! `document_url`, plus an optional `file` part. The blob goes to the
//! configured [`DocumentStore`](crate::storage::DocumentStore) under
//! `perdocs/{country}/{filename}`.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::enums::{ensure_valid, Visibility};
use go_core::error::CoreError;
use go_core::storage::{nice_document_path, sanitize_filename, MAX_DOCUMENT_BYTES};
use go_core::types::{DbId, EnumId};
use go_core::validation::require_non_blank;
use go_db::models::per_document::{CreatePerDocument, PerDocument, PerDocumentListParams};
use go_db::repositories::PerDocumentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::country::ensure_country_exists;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEditor;
use crate::query::page;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fields collected from an upload body.
#[derive(Debug, Default)]
struct UploadForm {
    name: Option<String>,
    country: Option<DbId>,
    visibility: Option<EnumId>,
    document_url: Option<String>,
    file: Option<(String, Vec<u8>)>,
}

fn parse_number<T: std::str::FromStr>(field: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Core(CoreError::Validation(format!("{field} must be a number"))))
}

async fn read_upload(mut multipart: Multipart) -> AppResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            form.file = Some((filename, data.to_vec()));
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        match name.as_str() {
            "name" => form.name = Some(text),
            "country" => form.country = Some(parse_number("country", &text)?),
            "visibility" => form.visibility = Some(parse_number("visibility", &text)?),
            "document_url" => form.document_url = Some(text),
            _ => {}
        }
    }

    Ok(form)
}

/// GET /api/v1/per/documents
///
/// Hidden documents are listed for admins only.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<PerDocumentListParams>,
) -> AppResult<Json<DataResponse<Vec<PerDocument>>>> {
    let (limit, offset) = page(params.limit, params.offset);
    let documents =
        PerDocumentRepo::list(&state.pool, &params, user.is_admin(), limit, offset).await?;
    Ok(Json(DataResponse { data: documents }))
}

/// GET /api/v1/per/documents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PerDocument>>> {
    let document = PerDocumentRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|d| user.is_admin() || d.visibility != Visibility::Hidden.id())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PerDocument",
            id,
        }))?;
    Ok(Json(DataResponse { data: document }))
}

/// POST /api/v1/per/documents (multipart)
pub async fn upload(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<PerDocument>>)> {
    let form = read_upload(multipart).await?;

    let name = form
        .name
        .ok_or_else(|| AppError::BadRequest("Missing required 'name' field".into()))?;
    require_non_blank("name", &name)?;
    let visibility = form.visibility.unwrap_or(Visibility::Visible.id());
    ensure_valid::<Visibility>(visibility)?;
    if let Some(country_id) = form.country {
        ensure_country_exists(&state.pool, country_id).await?;
    }

    let document_url = form.document_url.unwrap_or_default();
    let stored = match form.file {
        Some((filename, bytes)) => {
            if bytes.len() > MAX_DOCUMENT_BYTES {
                return Err(AppError::BadRequest(format!(
                    "Document exceeds {MAX_DOCUMENT_BYTES} bytes"
                )));
            }
            let country_id = form.country.ok_or_else(|| {
                AppError::BadRequest("'country' is required when uploading a file".into())
            })?;
            let path = nice_document_path(country_id, &sanitize_filename(&filename)?);
            Some(state.documents.put(&path, &bytes).await?)
        }
        None if document_url.trim().is_empty() => {
            return Err(AppError::BadRequest(
                "Either 'file' or 'document_url' is required".into(),
            ));
        }
        None => None,
    };

    let input = CreatePerDocument {
        name,
        document: stored.clone(),
        document_url,
        country_id: form.country,
        visibility,
    };
    let document = match PerDocumentRepo::create(&state.pool, &input).await {
        Ok(document) => document,
        Err(e) => {
            if let Some(path) = stored.as_deref() {
                if let Err(cleanup) = state.documents.delete(path).await {
                    tracing::warn!(path, error = %cleanup, "Failed to remove orphaned document");
                }
            }
            return Err(e.into());
        }
    };

    tracing::info!(
        document_id = document.id,
        stored = ?document.document,
        user_id = user.user_id,
        "PER document uploaded",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: document })))
}

/// DELETE /api/v1/per/documents/{id}
///
/// Removes the row and then the stored blob. A blob that cannot be
/// removed is logged and left behind.
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let document = PerDocumentRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PerDocument",
            id,
        }))?;

    if let Some(path) = document.document.as_deref() {
        if let Err(e) = state.documents.delete(path).await {
            tracing::warn!(document_id = id, path, error = %e, "Failed to remove stored document");
        }
    }
    Ok(StatusCode::NO_CONTENT)
}
