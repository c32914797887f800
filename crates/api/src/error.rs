//! HTTP error type and its JSON rendering.
//!
//! Every failure leaves the API as `{"error": <message>, "code": <CODE>}`.
//! Messages of 500 responses are replaced with a generic text; the detail
//! only goes to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use go_core::error::CoreError;
use serde::Serialize;

use crate::storage::StorageError;

/// Error returned by every handler.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error raised by validation or lookups.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The document store could not write or remove a blob.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Malformed request that is not a field validation failure
    /// (broken multipart body, missing upload part).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing resource addressed by a code rather than a numeric id,
    /// such as a PER question.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

struct Rendered {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl Rendered {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An internal error occurred",
        )
    }
}

impl AppError {
    fn render(&self) -> Rendered {
        match self {
            AppError::Core(core) => render_core(core),
            AppError::Database(err) => render_sqlx(err),
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Document storage error");
                Rendered::internal()
            }
            AppError::BadRequest(msg) => Rendered::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::NotFound(msg) => Rendered::new(StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                Rendered::internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Rendered {
            status,
            code,
            message,
        } = self.render();
        let body = ErrorBody {
            error: message,
            code,
        };
        (status, Json(body)).into_response()
    }
}

fn render_core(err: &CoreError) -> Rendered {
    match err {
        CoreError::NotFound { entity, id } => Rendered::new(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => {
            Rendered::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
        }
        CoreError::Conflict(msg) => Rendered::new(StatusCode::CONFLICT, "CONFLICT", msg),
        CoreError::Unauthorized(msg) => {
            Rendered::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg)
        }
        CoreError::Forbidden(msg) => Rendered::new(StatusCode::FORBIDDEN, "FORBIDDEN", msg),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            Rendered::internal()
        }
    }
}

/// Map PostgreSQL failures onto client errors where the request is at fault.
///
/// - `RowNotFound`: 404.
/// - 23505 on a `uq_*` constraint: 409.
/// - 23503 (dangling reference) and 23514 (check constraint): 400.
/// - anything else: 500.
fn render_sqlx(err: &sqlx::Error) -> Rendered {
    let db_err = match err {
        sqlx::Error::RowNotFound => {
            return Rendered::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found")
        }
        sqlx::Error::Database(db_err) => db_err,
        other => {
            tracing::error!(error = %other, "Database error");
            return Rendered::internal();
        }
    };

    let constraint = db_err.constraint().unwrap_or("unknown");
    match db_err.code().as_deref() {
        Some("23505") if constraint.starts_with("uq_") => Rendered::new(
            StatusCode::CONFLICT,
            "CONFLICT",
            format!("Duplicate value violates unique constraint: {constraint}"),
        ),
        Some("23503") => Rendered::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            format!("Referenced record does not exist ({constraint})"),
        ),
        Some("23514") => Rendered::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            format!("Value violates check constraint: {constraint}"),
        ),
        _ => {
            tracing::error!(error = %db_err, "Database error");
            Rendered::internal()
        }
    }
}
