//! Integration tests for ERU, personnel, partner deployment and project repositories.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use sqlx::PgPool;
use go_db::models::country::CreateCountry;
use go_db::models::district::CreateDistrict;
use go_db::models::eru::{CreateEru, CreateEruOwner, EruListParams};
use go_db::models::partner_deployment::{
    CreatePartnerSocietyActivity, CreatePartnerSocietyDeployment, PartnerDeploymentListParams,
    UpdatePartnerSocietyDeployment,
};
use go_db::models::personnel::{CreatePersonnel, CreatePersonnelDeployment, PersonnelListParams};
use go_db::models::project::{CreateProject, ProjectListParams};
use go_db::models::user::CreateUser;
use go_db::repositories::{
    CountryRepo, DistrictRepo, EruOwnerRepo, EruRepo, PartnerActivityRepo, PartnerDeploymentRepo,
    PersonnelDeploymentRepo, PersonnelRepo, ProjectRepo, UserRepo,
};

async fn seed_country(pool: &PgPool, name: &str, iso: &str) -> i64 {
    let input = CreateCountry {
        name: name.to_string(),
        iso: Some(iso.to_string()),
        iso3: None,
        society_name: None,
        society_url: None,
        region: None,
    };
    CountryRepo::create(pool, &input).await.unwrap().id
}

async fn seed_district(pool: &PgPool, country_id: i64, name: &str) -> i64 {
    let input = CreateDistrict {
        name: name.to_string(),
        code: None,
        country_id: Some(country_id),
    };
    DistrictRepo::create(pool, &input).await.unwrap().id
}

fn new_eru(owner_id: i64, available: bool) -> CreateEru {
    CreateEru {
        eru_type: 3,
        units: Some(2),
        equipment_units: None,
        deployed_to_id: None,
        event_id: None,
        eru_owner_id: owner_id,
        available: Some(available),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_eru_owner_is_unique_per_society_and_cascades(pool: PgPool) {
    let norway = seed_country(&pool, "Norway", "NO").await;
    let owner = EruOwnerRepo::create(
        &pool,
        &CreateEruOwner { national_society_country_id: Some(norway) },
    )
    .await
    .unwrap();

    let dup = EruOwnerRepo::create(
        &pool,
        &CreateEruOwner { national_society_country_id: Some(norway) },
    )
    .await
    .unwrap_err();
    assert_matches!(dup, sqlx::Error::Database(db) if db.constraint() == Some("uq_eru_owners_country"));

    EruRepo::create(&pool, &new_eru(owner.id, true)).await.unwrap();
    EruRepo::create(&pool, &new_eru(owner.id, false)).await.unwrap();

    let available = EruListParams { available: Some(true), ..Default::default() };
    assert_eq!(EruRepo::list(&pool, &available, 100, 0).await.unwrap().len(), 1);
    assert_eq!(EruRepo::list_by_owners(&pool, &[owner.id]).await.unwrap().len(), 2);

    assert!(EruOwnerRepo::delete(&pool, owner.id).await.unwrap());
    assert!(EruRepo::list_by_owners(&pool, &[owner.id]).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_personnel_filtered_by_type_and_deployment(pool: PgPool) {
    let country = seed_country(&pool, "Haiti", "HT").await;
    let deployment = PersonnelDeploymentRepo::create(
        &pool,
        &CreatePersonnelDeployment {
            country_deployed_to_id: Some(country),
            region_deployed_to: Some(1),
            event_deployed_to_id: None,
            comments: None,
        },
    )
    .await
    .unwrap();

    for (name, kind) in [("Ana", "rdrt"), ("Ben", "fact"), ("Cy", "rdrt")] {
        let input = CreatePersonnel {
            start_date: None,
            end_date: None,
            name: name.to_string(),
            role: None,
            personnel_type: kind.to_string(),
            country_from_id: None,
            deployment_id: deployment.id,
        };
        PersonnelRepo::create(&pool, &input).await.unwrap();
    }

    let rdrt = PersonnelListParams {
        personnel_type: Some("rdrt".into()),
        ..Default::default()
    };
    assert_eq!(PersonnelRepo::list(&pool, &rdrt, 100, 0).await.unwrap().len(), 2);

    let by_deployment = PersonnelListParams {
        deployment: Some(deployment.id),
        ..Default::default()
    };
    assert_eq!(PersonnelRepo::list(&pool, &by_deployment, 100, 0).await.unwrap().len(), 3);

    assert!(PersonnelDeploymentRepo::delete(&pool, deployment.id).await.unwrap());
    assert!(PersonnelRepo::list(&pool, &by_deployment, 100, 0).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partner_deployment_districts_replaced_on_update(pool: PgPool) {
    let sender = seed_country(&pool, "Germany", "DE").await;
    let host = seed_country(&pool, "Mali", "ML").await;
    let d1 = seed_district(&pool, host, "Kayes").await;
    let d2 = seed_district(&pool, host, "Mopti").await;
    let activity = PartnerActivityRepo::create(
        &pool,
        &CreatePartnerSocietyActivity { activity: "Logistics".into() },
    )
    .await
    .unwrap();

    let deployment = PartnerDeploymentRepo::create(
        &pool,
        &CreatePartnerSocietyDeployment {
            start_date: None,
            end_date: None,
            name: "Delegate".into(),
            role: None,
            parent_society_id: Some(sender),
            country_deployed_to_id: Some(host),
            activity_id: Some(activity.id),
            district_deployed_to: vec![d2, d1],
        },
    )
    .await
    .unwrap();
    assert_eq!(deployment.district_deployed_to, vec![d1, d2]);

    let update = UpdatePartnerSocietyDeployment {
        start_date: None,
        end_date: None,
        name: None,
        role: Some("Coordinator".into()),
        parent_society_id: None,
        country_deployed_to_id: None,
        activity_id: None,
        district_deployed_to: Some(vec![d2]),
    };
    let updated = PartnerDeploymentRepo::update(&pool, deployment.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.district_deployed_to, vec![d2]);
    assert_eq!(updated.role, "Coordinator");

    let by_parent = PartnerDeploymentListParams { parent: Some(sender), ..Default::default() };
    assert_eq!(PartnerDeploymentRepo::list(&pool, &by_parent, 100, 0).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_country_filter_follows_district(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            username: "planner".into(),
            email: "planner@example.org".into(),
            password_hash: "x".into(),
            role: "editor".into(),
        },
    )
    .await
    .unwrap();
    let ns = seed_country(&pool, "Sweden", "SE").await;
    let host = seed_country(&pool, "Kenya", "KE").await;
    let district = seed_district(&pool, host, "Turkana").await;

    let input = CreateProject {
        reporting_ns_id: ns,
        project_district_id: district,
        name: "Water points".into(),
        regional_project_id: None,
        event_id: None,
        dtype_id: None,
        programme_type: Some(0),
        primary_sector: Some(0),
        operation_type: None,
        start_date: NaiveDate::from_ymd_opt(2019, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2019, 12, 31),
        budget_amount: None,
        status: None,
        target_total: Some(5000),
        reached_total: None,
    };
    let project = ProjectRepo::create(&pool, user.id, &input).await.unwrap();
    assert_eq!(project.user_id, user.id);
    assert_eq!(project.reached_total, 0);

    let in_kenya = ProjectListParams { country: Some(host), ..Default::default() };
    assert_eq!(ProjectRepo::list(&pool, &in_kenya, 100, 0).await.unwrap().len(), 1);
    let in_sweden = ProjectListParams { country: Some(ns), ..Default::default() };
    assert!(ProjectRepo::list(&pool, &in_sweden, 100, 0).await.unwrap().is_empty());
    let by_ns = ProjectListParams { reporting_ns: Some(ns), ..Default::default() };
    assert_eq!(ProjectRepo::list(&pool, &by_ns, 100, 0).await.unwrap().len(), 1);
}
