//! Periodic databank ingestion.
//!
//! [`Ingestor`] owns the feed sources and serializes runs: the admin
//! trigger (`POST /cron-jobs/run`) and the background loop share one
//! instance, so two runs never overlap.

use std::sync::Arc;
use std::time::Duration;

use go_databank::sources::{Source, SourceContext};
use go_databank::{run_sources, DatabankError, RunSummary};
use go_db::models::cron_job::CronJob;
use go_db::repositories::CronJobRepo;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Outcome of one run: its counters and the cron job rows it wrote.
#[derive(Debug)]
pub struct IngestRun {
    pub summary: RunSummary,
    pub jobs: Vec<CronJob>,
}

pub struct Ingestor {
    ctx: SourceContext,
    sources: Vec<Box<dyn Source>>,
    running: Mutex<()>,
}

impl Ingestor {
    pub fn new(ctx: SourceContext, sources: Vec<Box<dyn Source>>) -> Self {
        Self {
            ctx,
            sources,
            running: Mutex::new(()),
        }
    }

    /// Names of the configured sources.
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Run every source once, waiting for any run already in progress.
    ///
    /// The cron job watermark is read under the run lock, so `jobs` holds
    /// only the rows written by this run.
    pub async fn run_once(&self) -> Result<IngestRun, DatabankError> {
        let _guard = self.running.lock().await;
        let watermark = CronJobRepo::max_id(&self.ctx.pool).await?;
        let summary = run_sources(&self.ctx, &self.sources).await?;
        let jobs = CronJobRepo::list_after(&self.ctx.pool, watermark).await?;
        Ok(IngestRun { summary, jobs })
    }
}

/// Run ingestion every `period` until `cancel` is triggered.
///
/// The first run starts immediately. A run is awaited before the next tick,
/// and missed ticks are delayed rather than bursted.
pub async fn run(ingestor: Arc<Ingestor>, period: Duration, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = period.as_secs(),
        sources = ?ingestor.source_names(),
        "Databank ingestion loop started"
    );

    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Databank ingestion loop stopping");
                break;
            }
            _ = interval.tick() => {
                match ingestor.run_once().await {
                    Ok(IngestRun { summary, jobs }) => {
                        tracing::info!(?summary, cron_jobs = jobs.len(), "Databank ingestion run finished");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Databank ingestion run failed");
                    }
                }
            }
        }
    }
}
