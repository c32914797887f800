//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - Where the API embeds related records, the `Serialize` detail shape

// Accounts
pub mod user;

// Disaster domain
pub mod appeal;
pub mod country;
pub mod disaster_type;
pub mod district;
pub mod event;
pub mod field_report;

// Deployments domain
pub mod eru;
pub mod partner_deployment;
pub mod personnel;
pub mod project;
pub mod regional_project;

// PER domain
pub mod ns_phase;
pub mod per_document;
pub mod per_draft;
pub mod per_form;
pub mod per_overview;
pub mod per_work_plan;

// Databank
pub mod country_overview;
pub mod cron_job;
