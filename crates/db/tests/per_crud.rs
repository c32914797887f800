//! Integration tests for the PER repositories.

use assert_matches::assert_matches;
use sqlx::PgPool;
use go_db::models::country::CreateCountry;
use go_db::models::per_document::{CreatePerDocument, PerDocumentListParams};
use go_db::models::per_form::{CreateForm, FormAnswer, DEFAULT_IP_ADDRESS};
use go_db::models::user::CreateUser;
use go_db::repositories::{
    CountryRepo, FormDataRepo, FormRepo, NsPhaseRepo, PerDocumentRepo, UserRepo,
};

async fn seed_user(pool: &PgPool) -> i64 {
    let input = CreateUser {
        username: "assessor".into(),
        email: "assessor@example.org".into(),
        password_hash: "x".into(),
        role: "editor".into(),
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

async fn seed_country(pool: &PgPool) -> i64 {
    let input = CreateCountry {
        name: "Peru".into(),
        iso: Some("PE".into()),
        iso3: None,
        society_name: None,
        society_url: None,
        region: Some(1),
    };
    CountryRepo::create(pool, &input).await.unwrap().id
}

fn answer(question_id: &str, selected_option: i16) -> FormAnswer {
    FormAnswer {
        question_id: question_id.to_string(),
        selected_option,
        notes: None,
    }
}

fn new_form(country_id: i64, data: Vec<FormAnswer>) -> CreateForm {
    CreateForm {
        code: "a1".into(),
        name: "Policy".into(),
        language: 2,
        country_id: Some(country_id),
        ns: None,
        started_at: None,
        ended_at: None,
        submitted_at: None,
        finalized: None,
        validated: None,
        ip_address: None,
        comment: None,
        data,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_form_defaults_and_unique_ids(pool: PgPool) {
    let user = seed_user(&pool).await;
    let country = seed_country(&pool).await;

    let first = FormRepo::create(&pool, user, &new_form(country, vec![answer("c0q0", 1)]))
        .await
        .unwrap();
    let second = FormRepo::create(&pool, user, &new_form(country, vec![])).await.unwrap();

    assert_eq!(first.ip_address, DEFAULT_IP_ADDRESS);
    assert!(!first.finalized);
    assert_ne!(first.unique_id, second.unique_id);
    assert_eq!(first.unique_id.get_version_num(), 4);

    let data = FormDataRepo::list_by_form(&pool, first.id).await.unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].question_id, "c0q0");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_form_data_upsert_replaces_answer(pool: PgPool) {
    let user = seed_user(&pool).await;
    let country = seed_country(&pool).await;
    let form = FormRepo::create(&pool, user, &new_form(country, vec![answer("c0q0", 0)]))
        .await
        .unwrap();

    let mut revised = answer("c0q0", 7);
    revised.notes = Some("strong".into());
    FormDataRepo::upsert_many(&pool, form.id, &[revised, answer("c0q1", 1)])
        .await
        .unwrap();

    let data = FormDataRepo::list_by_form(&pool, form.id).await.unwrap();
    assert_eq!(data.len(), 2);
    let q0 = data.iter().find(|d| d.question_id == "c0q0").unwrap();
    assert_eq!(q0.selected_option, 7);
    assert_eq!(q0.notes, "strong");

    let finalized = FormRepo::finalize(&pool, form.id).await.unwrap().unwrap();
    assert!(finalized.finalized);
    let again = FormRepo::finalize(&pool, form.id).await.unwrap().unwrap();
    assert_eq!(again.submitted_at, finalized.submitted_at);

    assert!(FormRepo::delete(&pool, form.id).await.unwrap());
    assert!(FormDataRepo::list_by_form(&pool, form.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ns_phase_upsert_keeps_one_row_per_country(pool: PgPool) {
    let country = seed_country(&pool).await;
    let first = NsPhaseRepo::upsert(&pool, country, 1).await.unwrap();
    let second = NsPhaseRepo::upsert(&pool, country, 3).await.unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(second.phase, 3);
    assert_eq!(NsPhaseRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hidden_documents_listed_only_on_request(pool: PgPool) {
    let country = seed_country(&pool).await;
    for (name, visibility) in [("public.pdf", 1), ("internal.pdf", 0)] {
        let input = CreatePerDocument {
            name: name.to_string(),
            document: Some(format!("perdocs/{country}/{name}")),
            document_url: String::new(),
            country_id: Some(country),
            visibility,
        };
        PerDocumentRepo::create(&pool, &input).await.unwrap();
    }

    let params = PerDocumentListParams { country: Some(country), ..Default::default() };
    let public = PerDocumentRepo::list(&pool, &params, false, 100, 0).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].name, "public.pdf");

    let all = PerDocumentRepo::list(&pool, &params, true, 100, 0).await.unwrap();
    assert_eq!(all.len(), 2);

    let removed = PerDocumentRepo::delete(&pool, all[0].id).await.unwrap();
    assert_matches!(removed, Some(doc) if doc.id == all[0].id);
}
