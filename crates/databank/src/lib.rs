//! Databank ingestion: pulls external humanitarian feeds into per-country
//! overview records.
//!
//! A [`sources::Source`] fetches its feed once per run ([`sources::Source::prefetch`])
//! and then writes the slice belonging to each country
//! ([`sources::Source::load`]). [`runner::run_sources`] drives every source
//! over every country and records the outcome in the `cron_jobs` table.

pub mod config;
pub mod error;
pub mod runner;
pub mod sources;

pub use config::DatabankConfig;
pub use error::DatabankError;
pub use runner::{run_sources, RunSummary};
