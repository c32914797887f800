use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use go_databank::sources::{default_sources, SourceContext};
use go_databank::{run_sources, DatabankConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "go_databank=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DatabankConfig::from_env();
    tracing::info!(start_network_url = %config.start_network_url, "Loaded databank configuration");

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = go_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    go_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let ctx = SourceContext::new(pool, &config).context("Failed to build HTTP client")?;
    let sources = default_sources(&config);
    let summary = run_sources(&ctx, &sources).await?;

    if summary.failed_sources > 0 || summary.load_errors > 0 {
        tracing::warn!(?summary, "Databank ingestion finished with errors");
    } else {
        tracing::info!(?summary, "Databank ingestion finished");
    }
    Ok(())
}
