//! Read-only access to the PER question catalog.

use axum::extract::{Path, Query};
use axum::Json;
use go_core::error::CoreError;
use go_core::per_catalog::{self, CatalogEntry};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

#[derive(Debug, Deserialize)]
pub struct QuestionParams {
    /// Form code such as `a1` or `a3-2`.
    pub area: Option<String>,
}

/// GET /api/v1/per/questions
pub async fn list(
    _user: AuthUser,
    Query(params): Query<QuestionParams>,
) -> AppResult<Json<DataResponse<Vec<CatalogEntry>>>> {
    if let Some(area) = params.area.as_deref() {
        if !per_catalog::is_known_area(area) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown PER area '{area}'"
            ))));
        }
    }
    Ok(Json(DataResponse {
        data: per_catalog::entries(params.area.as_deref()),
    }))
}

/// GET /api/v1/per/questions/{code}
pub async fn get_by_code(
    _user: AuthUser,
    Path(code): Path<String>,
) -> AppResult<Json<DataResponse<CatalogEntry>>> {
    let entry = per_catalog::entry(&code)
        .ok_or_else(|| AppError::NotFound(format!("PER question '{code}' not found")))?;
    Ok(Json(DataResponse { data: entry }))
}
