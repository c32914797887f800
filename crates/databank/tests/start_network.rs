//! End-to-end ingestion tests against a local stand-in for the feed.

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use go_core::enums::CronJobStatus;
use go_databank::sources::{Source, SourceContext, StartNetwork};
use go_databank::{run_sources, DatabankConfig};
use go_db::models::country::CreateCountry;
use go_db::repositories::{CountryOverviewRepo, CountryRepo, CronJobRepo};

const FEED: &str = "Country,Alert date,Alert,Alert type,Amount Awarded,Crisis Type\n\
Kenya,12/31/2018 09:15,Floods,Response,\"GBP 80,000\",Flood\n\
kenya,05 Mar 2019 - 14:30,Drought,Anticipation,\"GBP 120,000\",Drought\n\
Atlantis,12/31/2018 09:15,Storm,Response,100,Storm\n";

/// Serve `body` with `status` at `/alerts.csv`; returns the feed URL.
async fn spawn_feed(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route(
        "/alerts.csv",
        get(move || async move { (status, [(header::CONTENT_TYPE, "text/csv")], body) }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}/alerts.csv")
}

async fn seed_country(pool: &PgPool, name: &str, iso: Option<&str>) -> i64 {
    let input = CreateCountry {
        name: name.to_string(),
        iso: iso.map(str::to_string),
        iso3: None,
        society_name: None,
        society_url: None,
        region: None,
    };
    CountryRepo::create(pool, &input).await.unwrap().id
}

fn context(pool: PgPool) -> SourceContext {
    SourceContext::new(pool, &DatabankConfig::default()).unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_ok_response_records_erroneous_job(pool: PgPool) {
    let url = spawn_feed(StatusCode::SERVICE_UNAVAILABLE, "").await;
    let ctx = context(pool.clone());

    let data = StartNetwork::new(url.clone()).prefetch(&ctx).await.unwrap();
    assert!(data.is_empty());

    let jobs = CronJobRepo::list(&pool, Some("START_NETWORK"), 10, 0).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].status, CronJobStatus::Erroneous.id());
    assert_eq!(jobs[0].message, format!("Error querying StartNetwork feed at {url}"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_run_writes_alerts_to_matching_overviews(pool: PgPool) {
    let kenya = seed_country(&pool, "Kenya", Some("ke")).await;
    let chad = seed_country(&pool, "Chad", Some("TD")).await;
    let no_iso = seed_country(&pool, "Unlisted", None).await;

    let url = spawn_feed(StatusCode::OK, FEED).await;
    let ctx = context(pool.clone());
    let sources: Vec<Box<dyn Source>> = vec![Box::new(StartNetwork::new(url.clone()))];

    let summary = run_sources(&ctx, &sources).await.unwrap();
    assert_eq!(summary.failed_sources, 0);
    assert_eq!(summary.load_errors, 0);
    assert_eq!(summary.countries, 3);

    let overview = CountryOverviewRepo::find_by_country(&pool, kenya).await.unwrap().unwrap();
    let alerts = overview.start_network_data.unwrap();
    let alerts = alerts.as_array().unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0]["alert"], "Floods");
    assert_eq!(alerts[0]["amount_awarded"], 80_000);
    assert_eq!(alerts[1]["date"], "2019-03-05T14:00:30");

    for id in [chad, no_iso] {
        let overview = CountryOverviewRepo::find_by_country(&pool, id).await.unwrap().unwrap();
        assert!(overview.start_network_data.is_none());
    }

    let jobs = CronJobRepo::list(&pool, Some("START_NETWORK"), 10, 0).await.unwrap();
    assert_eq!(jobs[0].status, CronJobStatus::Successful.id());
    assert_eq!(jobs[0].num_result, 2);
    assert_eq!(jobs[0].message, format!("Done querying StartNetwork feed at {url}"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unreachable_feed_is_recorded_and_run_continues(pool: PgPool) {
    seed_country(&pool, "Kenya", Some("KE")).await;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/alerts.csv", listener.local_addr().unwrap());
    drop(listener);

    let ctx = context(pool.clone());
    let sources: Vec<Box<dyn Source>> = vec![Box::new(StartNetwork::new(url))];
    let summary = run_sources(&ctx, &sources).await.unwrap();
    assert_eq!(summary.failed_sources, 1);
    assert_eq!(summary.countries, 1);

    let jobs = CronJobRepo::list(&pool, Some("START_NETWORK"), 10, 0).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].status, CronJobStatus::Erroneous.id());
    assert!(jobs[0].backtrace.as_deref().is_some_and(|b| b.contains("HTTP request failed")));
}
