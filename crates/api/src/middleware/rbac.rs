//! Role guards layered on [`AuthUser`].
//!
//! A missing or bad token stays a 401; a valid token with too weak a role
//! is a 403.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use go_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

async fn authorize(
    parts: &mut Parts,
    state: &AppState,
    allowed: fn(&AuthUser) -> bool,
    denied: &'static str,
) -> Result<AuthUser, AppError> {
    let user = AuthUser::from_request_parts(parts, state).await?;
    if allowed(&user) {
        Ok(user)
    } else {
        tracing::debug!(user_id = user.user_id, role = %user.role, "Role check failed");
        Err(AppError::Core(CoreError::Forbidden(denied.into())))
    }
}

/// Admin only: reference data (countries, districts, disaster types),
/// user management and the ingestion log.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, AuthUser::is_admin, "Admin role required")
            .await
            .map(RequireAdmin)
    }
}

/// Editor or admin: every other write.
pub struct RequireEditor(pub AuthUser);

impl FromRequestParts<AppState> for RequireEditor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, AuthUser::can_edit, "Editor or Admin role required")
            .await
            .map(RequireEditor)
    }
}
