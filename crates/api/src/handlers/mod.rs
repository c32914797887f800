//! Request handlers, one module per resource.

pub mod admin;
pub mod appeal;
pub mod auth;
pub mod country;
pub mod cron_job;
pub mod disaster_type;
pub mod district;
pub mod eru;
pub mod event;
pub mod expand;
pub mod field_report;
pub mod partner_deployment;
pub mod per_document;
pub mod per_draft;
pub mod per_form;
pub mod per_overview;
pub mod per_phase;
pub mod per_question;
pub mod per_work_plan;
pub mod personnel;
pub mod project;
pub mod regional_project;
