//! User account model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert DTO. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Admin request body for creating a user with a plaintext password.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUserRequest {
    #[validate(length(min = 3, max = 150))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}
