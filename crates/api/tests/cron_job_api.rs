//! HTTP-level tests for the databank ingestion log.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn cron_jobs_are_admin_only(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app.clone(), "/api/v1/cron-jobs", &editor).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(app, "/api/v1/cron-jobs/run", json!({}), &editor).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unreachable_feed_is_recorded_as_erroneous(pool: PgPool) {
    let admin = common::token_for(&pool, "admin").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(app.clone(), "/api/v1/cron-jobs/run", json!({}), &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    let jobs = body_json(response).await["data"].clone();
    let jobs = jobs.as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["name"], "START_NETWORK");
    assert_eq!(jobs[0]["status"], 2);
    assert_eq!(jobs[0]["num_result"], 0);
    assert!(jobs[0]["message"]
        .as_str()
        .unwrap()
        .starts_with("START_NETWORK prefetch failed"));

    // A second run appends rather than replaces.
    let response = post_json_auth(app.clone(), "/api/v1/cron-jobs/run", json!({}), &admin).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

    let response = get_auth(app.clone(), "/api/v1/cron-jobs?name=START_NETWORK", &admin).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);

    let response = get_auth(app, "/api/v1/cron-jobs?name=OTHER_FEED", &admin).await;
    assert_eq!(body_json(response).await["data"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overlapping_runs_report_only_their_own_rows(pool: PgPool) {
    let ingestor = common::test_ingestor(pool, &common::test_config());

    let (first, second) = tokio::join!(ingestor.run_once(), ingestor.run_once());
    let (first, second) = (first.unwrap(), second.unwrap());

    assert_eq!(first.jobs.len(), 1);
    assert_eq!(second.jobs.len(), 1);
    assert_ne!(first.jobs[0].id, second.jobs[0].id);
    assert_eq!(first.summary.failed_sources, 1);
}
