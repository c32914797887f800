//! Route definitions for the disaster domain: countries, districts,
//! disaster types, events, appeals and field reports.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{appeal, country, disaster_type, district, event, field_report};
use crate::state::AppState;

/// Routes mounted at `/countries`.
///
/// ```text
/// GET    /                -> list (?region=)
/// POST   /                -> create (admin)
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update (admin)
/// GET    /{id}/overview   -> overview
/// ```
pub fn countries_router() -> Router<AppState> {
    Router::new()
        .route("/", get(country::list).post(country::create))
        .route("/{id}", get(country::get_by_id).put(country::update))
        .route("/{id}/overview", get(country::overview))
}

/// Routes mounted at `/districts`. Writes are admin only.
pub fn districts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(district::list).post(district::create))
        .route(
            "/{id}",
            get(district::get_by_id)
                .put(district::update)
                .delete(district::delete),
        )
}

/// Routes mounted at `/disaster-types`. Writes are admin only.
pub fn disaster_types_router() -> Router<AppState> {
    Router::new()
        .route("/", get(disaster_type::list).post(disaster_type::create))
        .route(
            "/{id}",
            get(disaster_type::get_by_id)
                .put(disaster_type::update)
                .delete(disaster_type::delete),
        )
}

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /                      -> list (?country=&dtype=&is_featured=)
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// GET    /{id}/appeals          -> list_appeals
/// GET    /{id}/field-reports    -> list_field_reports
/// ```
pub fn events_router() -> Router<AppState> {
    Router::new()
        .route("/", get(event::list).post(event::create))
        .route(
            "/{id}",
            get(event::get_by_id).put(event::update).delete(event::delete),
        )
        .route("/{id}/appeals", get(event::list_appeals))
        .route("/{id}/field-reports", get(event::list_field_reports))
}

/// Routes mounted at `/appeals`.
pub fn appeals_router() -> Router<AppState> {
    Router::new()
        .route("/", get(appeal::list).post(appeal::create))
        .route(
            "/{id}",
            get(appeal::get_by_id).put(appeal::update).delete(appeal::delete),
        )
}

/// Routes mounted at `/field-reports`.
///
/// ```text
/// GET    /                -> list (?event=&country=)
/// POST   /                -> create (with nested actions_taken)
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/actions    -> list_actions
/// POST   /{id}/actions    -> add_action
/// ```
pub fn field_reports_router() -> Router<AppState> {
    Router::new()
        .route("/", get(field_report::list).post(field_report::create))
        .route(
            "/{id}",
            get(field_report::get_by_id)
                .put(field_report::update)
                .delete(field_report::delete),
        )
        .route(
            "/{id}/actions",
            get(field_report::list_actions).post(field_report::add_action),
        )
}

/// Routes mounted at `/actions-taken`.
pub fn actions_taken_router() -> Router<AppState> {
    Router::new().route("/{id}", delete(field_report::delete_action))
}
