//! Handlers for `/admin/users`.
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use go_core::error::CoreError;
use go_core::roles::{ALL_ROLES, ROLE_VIEWER};
use go_core::validation::validate_input;
use go_db::models::user::{CreateUser, NewUserRequest, User};
use go_db::repositories::UserRepo;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/admin/users
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<NewUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<User>>)> {
    validate_input(&input)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = input.role.unwrap_or_else(|| ROLE_VIEWER.to_string());
    if !ALL_ROLES.contains(&role.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid role '{role}'. Must be one of: {ALL_ROLES:?}"
        ))));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
            role,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, created_by = admin.user_id, role = %user.role, "User created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// GET /api/v1/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<User>>>> {
    let (limit, offset) = params.clamped();
    let users = UserRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: users }))
}
