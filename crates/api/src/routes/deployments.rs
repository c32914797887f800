//! Route definitions for the deployments domain.

use axum::routing::get;
use axum::Router;

use crate::handlers::{eru, partner_deployment, personnel, project, regional_project};
use crate::state::AppState;

/// Routes mounted at `/eru-owners`.
pub fn eru_owners_router() -> Router<AppState> {
    Router::new()
        .route("/", get(eru::list_owners).post(eru::create_owner))
        .route(
            "/{id}",
            get(eru::get_owner)
                .put(eru::update_owner)
                .delete(eru::delete_owner),
        )
}

/// Routes mounted at `/erus`.
///
/// ```text
/// GET    /        -> list (?owner=&available=&deployed_to=)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn erus_router() -> Router<AppState> {
    Router::new()
        .route("/", get(eru::list).post(eru::create))
        .route("/{id}", get(eru::get_by_id).put(eru::update).delete(eru::delete))
}

/// Routes mounted at `/personnel-deployments`.
pub fn personnel_deployments_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(personnel::list_deployments).post(personnel::create_deployment),
        )
        .route(
            "/{id}",
            get(personnel::get_deployment)
                .put(personnel::update_deployment)
                .delete(personnel::delete_deployment),
        )
}

/// Routes mounted at `/personnel`.
pub fn personnel_router() -> Router<AppState> {
    Router::new()
        .route("/", get(personnel::list).post(personnel::create))
        .route(
            "/{id}",
            get(personnel::get_by_id)
                .put(personnel::update)
                .delete(personnel::delete),
        )
}

/// Routes mounted at `/partner-activities`.
pub fn partner_activities_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(partner_deployment::list_activities).post(partner_deployment::create_activity),
    )
}

/// Routes mounted at `/partner-deployments`.
pub fn partner_deployments_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(partner_deployment::list).post(partner_deployment::create),
        )
        .route(
            "/{id}",
            get(partner_deployment::get_by_id)
                .put(partner_deployment::update)
                .delete(partner_deployment::delete),
        )
}

/// Routes mounted at `/regional-projects`.
pub fn regional_projects_router() -> Router<AppState> {
    Router::new()
        .route("/", get(regional_project::list).post(regional_project::create))
        .route(
            "/{id}",
            get(regional_project::get_by_id)
                .put(regional_project::update)
                .delete(regional_project::delete),
        )
}

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /        -> list (?reporting_ns=&country=&regional_project=&status=)
/// POST   /        -> create (owner taken from the token)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn projects_router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
}
