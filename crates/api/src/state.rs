use std::sync::Arc;

use crate::background::ingest::Ingestor;
use crate::config::ServerConfig;
use crate::storage::DocumentStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc` or already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: go_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Backend for uploaded PER documents.
    pub documents: Arc<dyn DocumentStore>,
    /// Databank ingestion, shared by the admin trigger and the background loop.
    pub ingestor: Arc<Ingestor>,
}
