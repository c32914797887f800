//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod appeal_repo;
pub mod country_overview_repo;
pub mod country_repo;
pub mod cron_job_repo;
pub mod disaster_type_repo;
pub mod district_repo;
pub mod eru_repo;
pub mod event_repo;
pub mod field_report_repo;
pub mod ns_phase_repo;
pub mod partner_deployment_repo;
pub mod per_document_repo;
pub mod per_draft_repo;
pub mod per_form_repo;
pub mod per_overview_repo;
pub mod per_work_plan_repo;
pub mod personnel_repo;
pub mod project_repo;
pub mod regional_project_repo;
pub mod user_repo;

pub use appeal_repo::AppealRepo;
pub use country_overview_repo::CountryOverviewRepo;
pub use country_repo::CountryRepo;
pub use cron_job_repo::CronJobRepo;
pub use disaster_type_repo::DisasterTypeRepo;
pub use district_repo::DistrictRepo;
pub use eru_repo::{EruOwnerRepo, EruRepo};
pub use event_repo::EventRepo;
pub use field_report_repo::FieldReportRepo;
pub use ns_phase_repo::NsPhaseRepo;
pub use partner_deployment_repo::{PartnerActivityRepo, PartnerDeploymentRepo};
pub use per_document_repo::PerDocumentRepo;
pub use per_draft_repo::DraftRepo;
pub use per_form_repo::{FormDataRepo, FormRepo};
pub use per_overview_repo::OverviewRepo;
pub use per_work_plan_repo::WorkPlanRepo;
pub use personnel_repo::{PersonnelDeploymentRepo, PersonnelRepo};
pub use project_repo::ProjectRepo;
pub use regional_project_repo::RegionalProjectRepo;
pub use user_repo::UserRepo;
