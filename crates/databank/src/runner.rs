//! Drives every source over every country.

use go_core::enums::CronJobStatus;
use go_db::models::cron_job::NewCronJob;
use go_db::repositories::{CountryOverviewRepo, CountryRepo, CronJobRepo};
use serde::Serialize;

use crate::error::DatabankError;
use crate::sources::{Source, SourceContext, SourceData};

/// Counters describing one ingestion run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub sources: usize,
    pub failed_sources: usize,
    pub countries: usize,
    pub load_errors: usize,
}

/// Run all `sources` once.
///
/// Every source is prefetched first, then each country gets its overview
/// (created on first use) handed to every source that produced data. A
/// failure inside a source is logged and recorded as an erroneous cron job;
/// it never stops the other sources or countries. Only failing to list the
/// countries aborts the run.
pub async fn run_sources(
    ctx: &SourceContext,
    sources: &[Box<dyn Source>],
) -> Result<RunSummary, DatabankError> {
    let mut summary = RunSummary {
        sources: sources.len(),
        ..Default::default()
    };

    let mut prefetched: Vec<(&dyn Source, SourceData)> = Vec::with_capacity(sources.len());
    for source in sources {
        match source.prefetch(ctx).await {
            Ok(data) => prefetched.push((&**source, data)),
            Err(e) => {
                summary.failed_sources += 1;
                record_failure(ctx, source.name(), "prefetch", &e).await;
            }
        }
    }

    let countries = CountryRepo::list_all(&ctx.pool).await?;
    summary.countries = countries.len();

    for country in &countries {
        let overview = match CountryOverviewRepo::get_or_create(&ctx.pool, country.id).await {
            Ok(overview) => overview,
            Err(e) => {
                summary.load_errors += 1;
                let e = DatabankError::from(e);
                record_failure(ctx, "COUNTRY_OVERVIEW", "get_or_create", &e).await;
                continue;
            }
        };

        for (source, data) in &prefetched {
            if let Err(e) = source.load(ctx, country, &overview, data).await {
                summary.load_errors += 1;
                tracing::warn!(country_id = country.id, source = source.name(), "Source load failed");
                record_failure(ctx, source.name(), "load", &e).await;
            }
        }
    }

    tracing::info!(
        sources = summary.sources,
        failed_sources = summary.failed_sources,
        countries = summary.countries,
        load_errors = summary.load_errors,
        "Databank run complete"
    );
    Ok(summary)
}

async fn record_failure(ctx: &SourceContext, name: &str, stage: &str, error: &DatabankError) {
    tracing::error!(source = name, stage, error = %error, "Databank source failed");

    let mut job = NewCronJob::new(
        name,
        CronJobStatus::Erroneous.id(),
        format!("{name} {stage} failed: {error}"),
    );
    job.backtrace = Some(error.chain());

    if let Err(e) = CronJobRepo::create(&ctx.pool, &job).await {
        tracing::error!(source = name, error = %e, "Failed to record cron job");
    }
}
