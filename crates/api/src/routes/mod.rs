pub mod admin;
pub mod auth;
pub mod databank;
pub mod deployments;
pub mod disaster;
pub mod health;
pub mod per;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/me                                         current user (requires auth)
///
/// /admin/users                                     list, create (admin only)
///
/// /countries                                       list, create
/// /countries/{id}                                  get, update
/// /countries/{id}/overview                         databank overview
/// /districts                                       list, create
/// /districts/{id}                                  get, update, delete
/// /disaster-types                                  list, create
/// /disaster-types/{id}                             get, update, delete
/// /events                                          list, create
/// /events/{id}                                     get, update, delete
/// /events/{id}/appeals                             appeals of the event
/// /events/{id}/field-reports                       field reports of the event
/// /appeals                                         list, create
/// /appeals/{id}                                    get, update, delete
/// /field-reports                                   list, create
/// /field-reports/{id}                              get, update, delete
/// /field-reports/{id}/actions                      list, add
/// /actions-taken/{id}                              delete
///
/// /eru-owners                                      list, create
/// /eru-owners/{id}                                 get, update, delete
/// /erus                                            list, create
/// /erus/{id}                                       get, update, delete
/// /personnel-deployments                           list, create
/// /personnel-deployments/{id}                      get, update, delete
/// /personnel                                       list, create
/// /personnel/{id}                                  get, update, delete
/// /partner-activities                              list, create
/// /partner-deployments                             list, create
/// /partner-deployments/{id}                        get, update, delete
/// /regional-projects                               list, create
/// /regional-projects/{id}                          get, update, delete
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
///
/// /per/...                                         see routes::per
///
/// /cron-jobs                                       list (admin only)
/// /cron-jobs/run                                   run ingestion (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        // Disaster domain.
        .nest("/countries", disaster::countries_router())
        .nest("/districts", disaster::districts_router())
        .nest("/disaster-types", disaster::disaster_types_router())
        .nest("/events", disaster::events_router())
        .nest("/appeals", disaster::appeals_router())
        .nest("/field-reports", disaster::field_reports_router())
        .nest("/actions-taken", disaster::actions_taken_router())
        // Deployments.
        .nest("/eru-owners", deployments::eru_owners_router())
        .nest("/erus", deployments::erus_router())
        .nest(
            "/personnel-deployments",
            deployments::personnel_deployments_router(),
        )
        .nest("/personnel", deployments::personnel_router())
        .nest(
            "/partner-activities",
            deployments::partner_activities_router(),
        )
        .nest(
            "/partner-deployments",
            deployments::partner_deployments_router(),
        )
        .nest("/regional-projects", deployments::regional_projects_router())
        .nest("/projects", deployments::projects_router())
        // PER self-assessment.
        .nest("/per", per::router())
        // Databank ingestion log.
        .nest("/cron-jobs", databank::router())
}
