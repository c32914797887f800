//! HTTP-level tests for the PER (Preparedness for Effective Response)
//! resources.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth};
use serde_json::{json, Value};
use sqlx::PgPool;

const BOUNDARY: &str = "----go-per-boundary";

async fn create_country(app: axum::Router, admin: &str) -> Value {
    let response =
        post_json_auth(app, "/api/v1/countries", json!({ "name": "Kenya", "iso": "KE" }), admin)
            .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Question catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn questions_require_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/per/questions").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn questions_filtered_by_area(pool: PgPool) {
    let viewer = common::token_for(&pool, "viewer").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app.clone(), "/api/v1/per/questions?area=a1", &viewer).await;
    assert_eq!(response.status(), StatusCode::OK);
    let questions = body_json(response).await["data"].clone();
    let questions = questions.as_array().unwrap();
    assert!(!questions.is_empty());
    assert!(questions.iter().all(|q| q["area"] == "a1"));
    assert_eq!(questions[0]["code"], "a1c0q0");

    let response = get_auth(app.clone(), "/api/v1/per/questions/a1c0q4", &viewer).await;
    let entry = body_json(response).await["data"].clone();
    assert_eq!(entry["is_component_performance"], true);

    let response = get_auth(app.clone(), "/api/v1/per/questions?area=a9", &viewer).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get_auth(app, "/api/v1/per/questions/a9c0q0", &viewer).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn form_answers_until_finalized(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/per/forms",
        json!({
            "code": "a1",
            "name": "Policy review",
            "language": 2,
            "ip_address": "10.0.0.1",
            "data": [{ "question_id": "c0q1", "selected_option": 1, "notes": "Statutes revised" }]
        }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let form = body_json(response).await["data"].clone();
    assert_eq!(form["finalized"], false);
    assert_eq!(form["data"].as_array().unwrap().len(), 1);
    assert_eq!(
        form["data"][0]["question"],
        "1.2 NS mandate is aligned with RCRC Fundamental Principles."
    );
    let form_uri = format!("/api/v1/per/forms/{}", form["id"]);

    // Re-answering a question replaces the earlier answer.
    let response = put_json_auth(
        app.clone(),
        &format!("{form_uri}/data"),
        json!({ "data": [
            { "question_id": "c0q1", "selected_option": 4 },
            { "question_id": "c0q0", "selected_option": 0, "notes": "" }
        ] }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let answers = body_json(response).await["data"].clone();
    let answers = answers.as_array().unwrap();
    assert_eq!(answers.len(), 2);
    let c0q1 = answers.iter().find(|a| a["question_id"] == "c0q1").unwrap();
    assert_eq!(c0q1["selected_option"], 4);

    let response = post_json_auth(app.clone(), &format!("{form_uri}/finalize"), json!({}), &editor).await;
    assert_eq!(response.status(), StatusCode::OK);
    let finalized = body_json(response).await["data"].clone();
    assert_eq!(finalized["finalized"], true);

    let response = post_json_auth(app.clone(), &format!("{form_uri}/finalize"), json!({}), &editor).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["submitted_at"], finalized["submitted_at"]);

    let response = put_json_auth(
        app.clone(),
        &form_uri,
        json!({ "name": "Renamed after submission", "validated": true }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let response = get_auth(app.clone(), &form_uri, &editor).await;
    assert_eq!(body_json(response).await["data"]["name"], "Policy review");

    let response = put_json_auth(
        app,
        &format!("{form_uri}/data"),
        json!({ "data": [{ "question_id": "c0q0", "selected_option": 1 }] }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn form_input_is_checked_against_the_catalog(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let cases = [
        json!({ "code": "a1", "name": "Unknown question", "language": 2,
                "data": [{ "question_id": "c99q99", "selected_option": 1 }] }),
        json!({ "code": "a1", "name": "Bad answer", "language": 2,
                "data": [{ "question_id": "c0q0", "selected_option": 8 }] }),
        json!({ "code": "a7", "name": "Unknown area", "language": 2, "data": [] }),
        json!({ "code": "a1", "name": "Bad language", "language": 5, "data": [] }),
        json!({ "code": "a1", "name": "Bad ip", "language": 2, "ip_address": "not-an-ip", "data": [] }),
    ];
    for body in cases {
        let response = post_json_auth(app.clone(), "/api/v1/per/forms", body.clone(), &editor).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn viewers_read_but_cannot_write_forms(pool: PgPool) {
    let viewer = common::token_for(&pool, "viewer").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app.clone(), "/api/v1/per/forms", &viewer).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json_auth(
        app,
        "/api/v1/per/forms",
        json!({ "code": "a1", "name": "Nope", "language": 2, "data": [] }),
        &viewer,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Phases, drafts, work plans, overviews
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn phase_upsert_keeps_one_row_per_country(pool: PgPool) {
    let admin = common::token_for(&pool, "admin").await;
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);
    let kenya = create_country(app.clone(), &admin).await;
    let uri = format!("/api/v1/per/phases/{}", kenya["id"]);

    let response = put_json_auth(app.clone(), &uri, json!({ "phase": 1 }), &editor).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = put_json_auth(app.clone(), &uri, json!({ "phase": 3 }), &editor).await;
    assert_eq!(body_json(response).await["data"]["phase"], 3);

    let response = get_auth(app.clone(), "/api/v1/per/phases", &editor).await;
    let phases = body_json(response).await["data"].clone();
    assert_eq!(phases.as_array().unwrap().len(), 1);
    assert_eq!(phases[0]["country_id"], kenya["id"]);

    let response = put_json_auth(app.clone(), &uri, json!({ "phase": 6 }), &editor).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response =
        put_json_auth(app, "/api/v1/per/phases/999999", json!({ "phase": 1 }), &editor).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn drafts_are_filtered_by_code(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    for code in ["a1", "a2"] {
        let response = post_json_auth(
            app.clone(),
            "/api/v1/per/drafts",
            json!({ "code": code, "data": "{}" }),
            &editor,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_auth(app.clone(), "/api/v1/per/drafts?code=a2", &editor).await;
    let drafts = body_json(response).await["data"].clone();
    assert_eq!(drafts.as_array().unwrap().len(), 1);

    let response = delete_auth(
        app.clone(),
        &format!("/api/v1/per/drafts/{}", drafts[0]["id"]),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response =
        post_json_auth(app, "/api/v1/per/drafts", json!({ "code": "zz" }), &editor).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn work_plan_and_overview_lifecycle(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/per/work-plans",
        json!({
            "prioritization": 2,
            "timeline": "2020-01-31T00:00:00Z",
            "status": 4,
            "actions": "Train branch volunteers"
        }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let plan_uri = format!("/api/v1/per/work-plans/{}", body_json(response).await["data"]["id"]);

    let response = put_json_auth(app.clone(), &plan_uri, json!({ "status": 6 }), &editor).await;
    assert_eq!(body_json(response).await["data"]["status"], 6);

    let response = put_json_auth(app.clone(), &plan_uri, json!({ "status": 9 }), &editor).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/per/overviews",
        json!({
            "date_of_current_capacity_assessment": "2019-06-01T00:00:00Z",
            "type_of_capacity_assessment": 0,
            "date_of_mid_term_review": "2020-06-01T00:00:00Z",
            "approximate_date_next_capacity_assmt": "2021-06-01T00:00:00Z",
            "focal_point_email": "focal@redcross.test"
        }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(
        app,
        "/api/v1/per/overviews",
        json!({
            "date_of_current_capacity_assessment": "2019-06-01T00:00:00Z",
            "type_of_capacity_assessment": 7,
            "date_of_mid_term_review": "2020-06-01T00:00:00Z",
            "approximate_date_next_capacity_assmt": "2021-06-01T00:00:00Z"
        }),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn document_upload_and_delete(pool: PgPool) {
    let config = common::test_config();
    let root = config.document_storage_root.clone();
    let admin = common::token_for(&pool, "admin").await;
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app_with(pool, config);
    let kenya = create_country(app.clone(), &admin).await;
    let country = kenya["id"].to_string();

    let body = common::multipart_body(
        BOUNDARY,
        &[("name", "Plan of action"), ("country", country.as_str())],
        Some(("../../plan.pdf", &b"%PDF-1.4 plan"[..])),
    );
    let response =
        common::post_multipart_auth(app.clone(), "/api/v1/per/documents", BOUNDARY, body, &editor)
            .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let document = body_json(response).await["data"].clone();
    let stored = format!("perdocs/{country}/plan.pdf");
    assert_eq!(document["document"], stored.as_str());
    assert_eq!(document["visibility"], 1);
    assert_eq!(std::fs::read(root.join(&stored)).unwrap(), b"%PDF-1.4 plan");

    let response = delete_auth(
        app,
        &format!("/api/v1/per/documents/{}", document["id"]),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!root.join(&stored).exists());

    let _ = std::fs::remove_dir_all(root);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hidden_documents_are_admin_only(pool: PgPool) {
    let admin = common::token_for(&pool, "admin").await;
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let body = common::multipart_body(
        BOUNDARY,
        &[
            ("name", "Internal review"),
            ("visibility", "0"),
            ("document_url", "https://example.org/review.pdf"),
        ],
        None,
    );
    let response =
        common::post_multipart_auth(app.clone(), "/api/v1/per/documents", BOUNDARY, body, &editor)
            .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].clone();

    let response = get_auth(app.clone(), "/api/v1/per/documents", &editor).await;
    assert_eq!(body_json(response).await["data"], json!([]));
    let response = get_auth(app.clone(), &format!("/api/v1/per/documents/{id}"), &editor).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, "/api/v1/per/documents", &admin).await;
    let listed = body_json(response).await["data"].clone();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["document_url"], "https://example.org/review.pdf");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn document_needs_a_file_or_url(pool: PgPool) {
    let editor = common::token_for(&pool, "editor").await;
    let app = common::build_test_app(pool);

    let body = common::multipart_body(BOUNDARY, &[("name", "Empty")], None);
    let response =
        common::post_multipart_auth(app.clone(), "/api/v1/per/documents", BOUNDARY, body, &editor)
            .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A file without a country has nowhere to go.
    let body = common::multipart_body(BOUNDARY, &[("name", "Orphan")], Some(("a.pdf", &b"x"[..])));
    let response =
        common::post_multipart_auth(app, "/api/v1/per/documents", BOUNDARY, body, &editor).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
