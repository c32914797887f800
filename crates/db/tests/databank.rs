//! Integration tests for the databank tables.

use serde_json::json;
use sqlx::PgPool;
use go_core::enums::CronJobStatus;
use go_db::models::country::CreateCountry;
use go_db::models::cron_job::NewCronJob;
use go_db::repositories::{CountryOverviewRepo, CountryRepo, CronJobRepo};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overview_get_or_create_is_idempotent(pool: PgPool) {
    let input = CreateCountry {
        name: "Yemen".into(),
        iso: Some("YE".into()),
        iso3: None,
        society_name: None,
        society_url: None,
        region: Some(4),
    };
    let country = CountryRepo::create(&pool, &input).await.unwrap();

    let first = CountryOverviewRepo::get_or_create(&pool, country.id).await.unwrap();
    let second = CountryOverviewRepo::get_or_create(&pool, country.id).await.unwrap();
    assert_eq!(first.id, second.id);
    assert!(first.start_network_data.is_none());

    let data = json!([{ "alert": "Floods", "amount_awarded": 1000 }]);
    let saved = CountryOverviewRepo::set_start_network_data(&pool, first.id, &data)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.start_network_data, Some(data));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cron_jobs_listed_newest_first_and_by_name(pool: PgPool) {
    let mut ok = NewCronJob::new("START_NETWORK", CronJobStatus::Successful.id(), "Done");
    ok.num_result = 12;
    CronJobRepo::create(&pool, &ok).await.unwrap();
    let failed = NewCronJob::new("OTHER", CronJobStatus::Erroneous.id(), "Boom");
    let last = CronJobRepo::create(&pool, &failed).await.unwrap();

    let all = CronJobRepo::list(&pool, None, 100, 0).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, last.id);

    let after_first = CronJobRepo::list_after(&pool, all[1].id).await.unwrap();
    assert_eq!(after_first.len(), 1);
    assert_eq!(CronJobRepo::max_id(&pool).await.unwrap(), last.id);

    let start = CronJobRepo::list(&pool, Some("START_NETWORK"), 100, 0).await.unwrap();
    assert_eq!(start.len(), 1);
    assert_eq!(start[0].num_result, 12);
    assert_eq!(start[0].status, 0);
}
