//! Feed sources and the context they run in.

use std::collections::HashMap;

use async_trait::async_trait;
use go_db::models::country::Country;
use go_db::models::country_overview::CountryOverview;
use go_db::DbPool;

use crate::config::DatabankConfig;
use crate::error::DatabankError;

pub mod start_network;

pub use start_network::StartNetwork;

/// Prefetched payload keyed by upper-case ISO2 country code.
pub type SourceData = HashMap<String, serde_json::Value>;

/// Shared handles passed to every source call.
#[derive(Clone)]
pub struct SourceContext {
    pub pool: DbPool,
    pub http: reqwest::Client,
}

impl SourceContext {
    pub fn new(pool: DbPool, config: &DatabankConfig) -> Result<Self, DatabankError> {
        Ok(Self {
            pool,
            http: config.http_client()?,
        })
    }
}

/// An external feed that fills part of a [`CountryOverview`].
#[async_trait]
pub trait Source: Send + Sync {
    /// Job name recorded in `cron_jobs`.
    fn name(&self) -> &'static str;

    /// Fetch and aggregate the whole feed. Called once per run.
    async fn prefetch(&self, ctx: &SourceContext) -> Result<SourceData, DatabankError>;

    /// Write the slice of `data` that belongs to `country` into `overview`.
    async fn load(
        &self,
        ctx: &SourceContext,
        country: &Country,
        overview: &CountryOverview,
        data: &SourceData,
    ) -> Result<(), DatabankError>;
}

/// Every source enabled in this deployment.
pub fn default_sources(config: &DatabankConfig) -> Vec<Box<dyn Source>> {
    vec![Box::new(StartNetwork::new(config.start_network_url.clone()))]
}
