#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use go_api::auth::jwt::{generate_access_token, JwtConfig};
use go_api::auth::password::hash_password;
use go_api::background::ingest::Ingestor;
use go_api::config::ServerConfig;
use go_api::router::build_app_router;
use go_api::state::AppState;
use go_api::storage::LocalDocumentStore;
use go_databank::sources::{default_sources, SourceContext};
use go_databank::DatabankConfig;
use go_db::models::user::CreateUser;
use go_db::repositories::UserRepo;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig`.
///
/// Documents go to a fresh directory under the system temp dir and the
/// START Network feed points at a closed local port, so ingestion runs
/// fail fast without network access.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        document_storage_root: std::env::temp_dir()
            .join(format!("go-api-test-{}", uuid::Uuid::new_v4())),
        ingest_interval_secs: 0,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
        databank: DatabankConfig {
            start_network_url: "http://127.0.0.1:9/start-fund-all-alerts".to_string(),
            http_timeout_secs: 2,
        },
    }
}

/// Build the full application router, with the production middleware
/// stack, on top of `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// An [`Ingestor`] with the default sources over `pool`.
pub fn test_ingestor(pool: PgPool, config: &ServerConfig) -> Arc<Ingestor> {
    let ctx = SourceContext::new(pool, &config.databank).unwrap();
    Arc::new(Ingestor::new(ctx, default_sources(&config.databank)))
}

pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let documents = Arc::new(LocalDocumentStore::new(config.document_storage_root.clone()));
    let ingestor = test_ingestor(pool.clone(), &config);

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        documents,
        ingestor,
    };
    build_app_router(state, &config)
}

/// Create a user with `role` and return its id.
pub async fn create_user(pool: &PgPool, username: &str, role: &str) -> i64 {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@ifrc.test"),
        password_hash: hash_password(TEST_PASSWORD).unwrap(),
        role: role.to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

/// Create a user with `role` and return a bearer token for it.
pub async fn token_for(pool: &PgPool, role: &str) -> String {
    let username = format!("{role}-{}", uuid::Uuid::new_v4().simple());
    let user_id = create_user(pool, &username, role).await;
    generate_access_token(user_id, role, &test_config().jwt).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Build a `multipart/form-data` body from text fields and an optional file.
pub fn multipart_body(
    boundary: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

/// POST a multipart body with a bearer token.
pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    boundary: &str,
    body: Vec<u8>,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}
