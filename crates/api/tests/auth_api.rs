//! HTTP-level tests for login, `/auth/me` and admin user management.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;

async fn login(app: axum::Router, username: &str, password: &str) -> axum::response::Response {
    post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": username, "password": password }),
    )
    .await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_and_user(pool: PgPool) {
    let user_id = common::create_user(&pool, "amina", "editor").await;
    let app = common::build_test_app(pool);

    let response = login(app.clone(), "amina", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["token_type"], "Bearer");
    assert_eq!(data["expires_in"], 3600);
    assert_eq!(data["user"]["id"], user_id);
    assert_eq!(data["user"]["role"], "editor");
    assert!(data["user"].get("password_hash").is_none());

    let token = data["access_token"].as_str().unwrap();
    let me = get_auth(app, "/api/v1/auth/me", token).await;
    assert_eq!(me.status(), StatusCode::OK);
    assert_eq!(body_json(me).await["data"]["username"], "amina");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_wrong_password_or_unknown_user_is_401(pool: PgPool) {
    common::create_user(&pool, "amina", "viewer").await;
    let app = common::build_test_app(pool);

    let response = login(app.clone(), "amina", "not-the-password").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = login(app, "ghost", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inactive_account_is_403(pool: PgPool) {
    let user_id = common::create_user(&pool, "retired", "viewer").await;
    sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = login(app, "retired", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_requires_a_valid_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/v1/auth/me", "garbage.token.value").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_creates_users_with_default_viewer_role(pool: PgPool) {
    let admin = common::token_for(&pool, "admin").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/users",
        json!({ "username": "newbie", "email": "newbie@ifrc.test", "password": "long-enough-pw" }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["role"], "viewer");

    // The new account can log in.
    let response = login(app.clone(), "newbie", "long-enough-pw").await;
    assert_eq!(response.status(), StatusCode::OK);

    // Same username again violates uq_users_username.
    let response = post_json_auth(
        app,
        "/api/v1/admin/users",
        json!({ "username": "newbie", "email": "other@ifrc.test", "password": "long-enough-pw" }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_creation_is_validated(pool: PgPool) {
    let admin = common::token_for(&pool, "admin").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/admin/users",
        json!({ "username": "shorty", "email": "s@ifrc.test", "password": "short" }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app,
        "/api/v1/admin/users",
        json!({
            "username": "boss",
            "email": "boss@ifrc.test",
            "password": "long-enough-pw",
            "role": "superuser"
        }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_management_is_admin_only(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app.clone(), "/api/v1/admin/users", &editor).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get(app, "/api/v1/admin/users").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
