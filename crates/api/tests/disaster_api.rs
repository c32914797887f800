//! HTTP-level tests for the disaster domain: countries, events, appeals
//! and field reports.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, post_json, post_json_auth, put_json_auth};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_country(app: axum::Router, token: &str, name: &str, iso: &str) -> Value {
    let response = post_json_auth(
        app,
        "/api/v1/countries",
        json!({ "name": name, "iso": iso, "society_name": format!("{name} Red Cross"), "region": 0 }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Countries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn country_writes_require_admin(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);
    let body = json!({ "name": "Kenya", "iso": "KE" });

    let response = post_json(app.clone(), "/api/v1/countries", body.clone()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json_auth(app, "/api/v1/countries", body, &editor).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn countries_are_publicly_listed_and_filtered_by_region(pool: PgPool) {
    let admin = common::token_for(&pool, "admin").await;
    let app = common::build_test_app(pool);

    let kenya = create_country(app.clone(), &admin, "Kenya", "KE").await;
    let response = post_json_auth(
        app.clone(),
        "/api/v1/countries",
        json!({ "name": "France", "iso": "FR", "region": 3 }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(app.clone(), "/api/v1/countries?region=0").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], kenya["id"]);

    let response = get(app, &format!("/api/v1/countries/{}", kenya["id"])).await;
    assert_eq!(body_json(response).await["data"]["iso"], "KE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_region_is_rejected(pool: PgPool) {
    let admin = common::token_for(&pool, "admin").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/countries",
        json!({ "name": "Atlantis", "region": 9 }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_country_and_overview_are_404(pool: PgPool) {
    let admin = common::token_for(&pool, "admin").await;
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/countries/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let kenya = create_country(app.clone(), &admin, "Kenya", "KE").await;
    let response = get(app, &format!("/api/v1/countries/{}/overview", kenya["id"])).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Events and appeals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_lifecycle(pool: PgPool) {
    let admin = common::token_for(&pool, "admin").await;
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);
    let kenya = create_country(app.clone(), &admin, "Kenya", "KE").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/events",
        json!({
            "name": "Kenya Floods 2019",
            "dtype_id": 4,
            "alert_level": 1,
            "glide": "FL-2019-000001-KEN",
            "countries": [kenya["id"]]
        }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let event = body_json(response).await["data"].clone();
    assert_eq!(event["alert_level"], 1);
    assert_eq!(event["is_featured"], false);
    assert_eq!(event["countries"], json!([kenya["id"]]));
    let uri = format!("/api/v1/events/{}", event["id"]);

    let response = put_json_auth(app.clone(), &uri, json!({ "is_featured": true }), &editor).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["is_featured"], true);
    assert_eq!(updated["name"], "Kenya Floods 2019");

    let response = get(app.clone(), "/api/v1/events?is_featured=true").await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

    let response = delete_auth(app.clone(), &uri, &editor).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn viewer_cannot_write_events(pool: PgPool) {
    let viewer = common::token_for(&pool, "viewer").await;
    let app = common::build_test_app(pool);

    let response =
        post_json_auth(app, "/api/v1/events", json!({ "name": "Quake" }), &viewer).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_alert_level_is_rejected(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/events",
        json!({ "name": "Quake", "alert_level": 7 }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn appeals_are_listed_under_their_event(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let response =
        post_json_auth(app.clone(), "/api/v1/events", json!({ "name": "Cyclone Idai" }), &editor)
            .await;
    let event_id = body_json(response).await["data"]["id"].clone();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/appeals",
        json!({
            "aid": "MDRMZ014",
            "name": "Mozambique: Tropical Cyclone Idai",
            "atype": 1,
            "amount_requested": "10000000.00",
            "event_id": event_id
        }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let appeal = body_json(response).await["data"].clone();
    assert_eq!(appeal["status"], 0);
    assert_eq!(appeal["amount_requested"], "10000000.00");

    let response = get(app.clone(), &format!("/api/v1/events/{event_id}/appeals")).await;
    let appeals = body_json(response).await["data"].clone();
    assert_eq!(appeals.as_array().unwrap().len(), 1);
    assert_eq!(appeals[0]["aid"], "MDRMZ014");

    // Appeal ids are unique.
    let response = post_json_auth(
        app.clone(),
        "/api/v1/appeals",
        json!({ "aid": "MDRMZ014", "name": "Duplicate" }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get(app, "/api/v1/events/999999/appeals").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn appeal_dates_must_be_ordered(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/appeals",
        json!({
            "aid": "MDRKE043",
            "name": "Kenya: Floods",
            "start_date": "2019-05-01T00:00:00Z",
            "end_date": "2019-04-01T00:00:00Z"
        }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Field reports
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn field_report_with_nested_actions(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/field-reports",
        json!({
            "summary": "Flash floods in Garissa",
            "num_affected": 1200,
            "actions_taken": [
                { "organization": "NTLS", "actions": ["Evacuation", "First aid"], "summary": "Branch response" },
                { "organization": "FDRN", "actions": ["DREF launched"] }
            ]
        }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let report = body_json(response).await["data"].clone();
    assert_eq!(report["status"], 1);
    assert_eq!(report["num_affected"], 1200);
    assert_eq!(report["actions_taken"].as_array().unwrap().len(), 2);
    let report_uri = format!("/api/v1/field-reports/{}", report["id"]);

    let response = post_json_auth(
        app.clone(),
        &format!("{report_uri}/actions"),
        json!({ "organization": "PNS", "actions": ["Water trucking"] }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let action_id = body_json(response).await["data"]["id"].clone();

    let response = get(app.clone(), &report_uri).await;
    let detail = body_json(response).await["data"].clone();
    assert_eq!(detail["actions_taken"].as_array().unwrap().len(), 3);

    let response =
        delete_auth(app.clone(), &format!("/api/v1/actions-taken/{action_id}"), &editor).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("{report_uri}/actions")).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_action_organization_is_rejected(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/field-reports",
        json!({
            "summary": "Drought",
            "actions_taken": [{ "organization": "UN", "actions": [] }]
        }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
