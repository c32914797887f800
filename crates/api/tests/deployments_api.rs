//! HTTP-level tests for ERUs, personnel and projects.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, post_json_auth, put_json_auth};
use go_api::auth::jwt::generate_access_token;
use serde_json::{json, Value};
use sqlx::PgPool;

async fn created(response: axum::response::Response) -> Value {
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// ERUs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn eru_owner_embeds_its_units(pool: PgPool) {
    let admin = common::token_for(&pool, "admin").await;
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let norway = created(
        post_json_auth(
            app.clone(),
            "/api/v1/countries",
            json!({ "name": "Norway", "iso": "NO", "society_name": "Norwegian Red Cross" }),
            &admin,
        )
        .await,
    )
    .await;
    let owner = created(
        post_json_auth(
            app.clone(),
            "/api/v1/eru-owners",
            json!({ "national_society_country_id": norway["id"] }),
            &editor,
        )
        .await,
    )
    .await;
    assert_eq!(owner["national_society_country"]["name"], "Norway");
    assert_eq!(owner["eru_set"], json!([]));

    let eru = created(
        post_json_auth(
            app.clone(),
            "/api/v1/erus",
            json!({ "type": 3, "units": 2, "eru_owner_id": owner["id"] }),
            &editor,
        )
        .await,
    )
    .await;
    assert_eq!(eru["type"], 3);
    assert_eq!(eru["eru_owner"]["national_society_country"]["society_name"], "Norwegian Red Cross");
    assert_eq!(eru["eru_owner"]["eru_set"][0]["id"], eru["id"]);

    let response = get(app.clone(), &format!("/api/v1/erus/{}", eru["id"])).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await["data"].clone();
    assert_eq!(fetched["eru_owner"]["id"], owner["id"]);
    assert_eq!(fetched["eru_owner"]["eru_set"].as_array().unwrap().len(), 1);

    let response = get(app.clone(), &format!("/api/v1/eru-owners/{}", owner["id"])).await;
    let detail = body_json(response).await["data"].clone();
    assert_eq!(detail["eru_set"].as_array().unwrap().len(), 1);
    assert_eq!(detail["eru_set"][0]["id"], eru["id"]);

    // One owner per national society.
    let response = post_json_auth(
        app,
        "/api/v1/eru-owners",
        json!({ "national_society_country_id": norway["id"] }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_eru_type_is_rejected(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let owner = created(post_json_auth(app.clone(), "/api/v1/eru-owners", json!({}), &editor).await).await;
    let response = post_json_auth(
        app,
        "/api/v1/erus",
        json!({ "type": 42, "eru_owner_id": owner["id"] }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_an_owner_removes_its_units(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let owner = created(post_json_auth(app.clone(), "/api/v1/eru-owners", json!({}), &editor).await).await;
    let eru = created(
        post_json_auth(
            app.clone(),
            "/api/v1/erus",
            json!({ "type": 0, "eru_owner_id": owner["id"] }),
            &editor,
        )
        .await,
    )
    .await;

    let response =
        delete_auth(app.clone(), &format!("/api/v1/eru-owners/{}", owner["id"]), &editor).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/erus/{}", eru["id"])).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Personnel
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn personnel_hang_off_a_deployment(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let deployment = created(
        post_json_auth(
            app.clone(),
            "/api/v1/personnel-deployments",
            json!({ "region_deployed_to": 0, "comments": "Surge" }),
            &editor,
        )
        .await,
    )
    .await;

    let person = created(
        post_json_auth(
            app.clone(),
            "/api/v1/personnel",
            json!({
                "name": "A. Delegate",
                "role": "Team leader",
                "type": "rdrt",
                "deployment_id": deployment["id"],
                "start_date": "2019-03-01T00:00:00Z",
                "end_date": "2019-04-01T00:00:00Z"
            }),
            &editor,
        )
        .await,
    )
    .await;
    assert_eq!(person["type"], "rdrt");
    assert_eq!(person["deployment"]["id"], deployment["id"]);
    assert_eq!(person["deployment"]["comments"], "Surge");

    let response = get(app, &format!("/api/v1/personnel/{}", person["id"])).await;
    assert_eq!(body_json(response).await["data"]["name"], "A. Delegate");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_personnel_input_is_rejected(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let deployment = created(
        post_json_auth(app.clone(), "/api/v1/personnel-deployments", json!({}), &editor).await,
    )
    .await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/personnel",
        json!({ "name": "Volunteer", "type": "volunteer", "deployment_id": deployment["id"] }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/personnel",
        json!({
            "name": "Backwards",
            "type": "eru",
            "deployment_id": deployment["id"],
            "start_date": "2019-05-01T00:00:00Z",
            "end_date": "2019-04-01T00:00:00Z"
        }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app,
        "/api/v1/personnel-deployments",
        json!({ "region_deployed_to": 11 }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_is_owned_by_the_caller_and_expanded(pool: PgPool) {
    let admin = common::token_for(&pool, "admin").await;
    let editor_id = common::create_user(&pool, "project-editor", "editor").await;
    let editor = generate_access_token(editor_id, "editor", &common::test_config().jwt).unwrap();
    let app = common::build_test_app(pool);

    let kenya = created(
        post_json_auth(
            app.clone(),
            "/api/v1/countries",
            json!({ "name": "Kenya", "iso": "KE", "society_name": "Kenya Red Cross Society" }),
            &admin,
        )
        .await,
    )
    .await;
    let district = created(
        post_json_auth(
            app.clone(),
            "/api/v1/districts",
            json!({ "name": "Garissa", "code": "KE07", "country_id": kenya["id"] }),
            &admin,
        )
        .await,
    )
    .await;
    let regional = created(
        post_json_auth(
            app.clone(),
            "/api/v1/regional-projects",
            json!({ "name": "Horn of Africa WASH" }),
            &editor,
        )
        .await,
    )
    .await;

    let project = created(
        post_json_auth(
            app.clone(),
            "/api/v1/projects",
            json!({
                "reporting_ns_id": kenya["id"],
                "project_district_id": district["id"],
                "regional_project_id": regional["id"],
                "name": "Borehole rehabilitation",
                "primary_sector": 0,
                "status": 1,
                "start_date": "2019-01-01",
                "end_date": "2019-12-31"
            }),
            &editor,
        )
        .await,
    )
    .await;
    assert_eq!(project["user_id"], editor_id);
    assert_eq!(project["reporting_ns_detail"]["iso"], "KE");
    assert_eq!(project["project_district_detail"]["code"], "KE07");
    assert_eq!(project["regional_project_detail"]["name"], "Horn of Africa WASH");

    let response = get(app.clone(), "/api/v1/projects?status=1").await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

    // Deleting the regional project only clears the link.
    let response = delete_auth(
        app.clone(),
        &format!("/api/v1/regional-projects/{}", regional["id"]),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/projects/{}", project["id"])).await;
    let detail = body_json(response).await["data"].clone();
    assert!(detail["regional_project_id"].is_null());
    assert!(detail["regional_project_detail"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_codes_are_validated(pool: PgPool) {
    let admin = common::token_for(&pool, "admin").await;
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/projects?status=9").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let kenya = created(
        post_json_auth(app.clone(), "/api/v1/countries", json!({ "name": "Kenya" }), &admin).await,
    )
    .await;
    let district = created(
        post_json_auth(
            app.clone(),
            "/api/v1/districts",
            json!({ "name": "Turkana", "country_id": kenya["id"] }),
            &admin,
        )
        .await,
    )
    .await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/projects",
        json!({
            "reporting_ns_id": kenya["id"],
            "project_district_id": district["id"],
            "name": "Bad sector",
            "primary_sector": 99
        }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_auth(
        app,
        "/api/v1/projects/999999",
        json!({ "name": "Nothing here" }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
