use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use go_api::background::ingest::{self, Ingestor};
use go_api::config::ServerConfig;
use go_api::router::build_app_router;
use go_api::state::AppState;
use go_api::storage::LocalDocumentStore;
use go_databank::sources::{default_sources, SourceContext};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "go_api=debug,go_databank=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = go_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    go_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    go_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Document storage ---
    let documents = Arc::new(LocalDocumentStore::new(config.document_storage_root.clone()));
    tracing::info!(root = %config.document_storage_root.display(), "Document storage ready");

    // --- Databank ingestion ---
    let source_ctx = SourceContext::new(pool.clone(), &config.databank)
        .expect("Failed to build databank HTTP client");
    let ingestor = Arc::new(Ingestor::new(source_ctx, default_sources(&config.databank)));

    let ingest_cancel = CancellationToken::new();
    let ingest_handle = (config.ingest_interval_secs > 0).then(|| {
        tokio::spawn(ingest::run(
            Arc::clone(&ingestor),
            Duration::from_secs(config.ingest_interval_secs),
            ingest_cancel.clone(),
        ))
    });
    if ingest_handle.is_none() {
        tracing::info!("Background ingestion disabled (INGEST_INTERVAL_SECS=0)");
    }

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        documents,
        ingestor,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    ingest_cancel.cancel();
    if let Some(handle) = ingest_handle {
        let timeout = Duration::from_secs(config.shutdown_timeout_secs);
        if tokio::time::timeout(timeout, handle).await.is_err() {
            tracing::warn!("Ingestion run still in progress at shutdown, abandoning it");
        } else {
            tracing::info!("Ingestion loop stopped");
        }
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
