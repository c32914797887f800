//! Route definitions for the `/per` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::Router;
use go_core::storage::MAX_DOCUMENT_BYTES;

use crate::handlers::{
    per_document, per_draft, per_form, per_overview, per_phase, per_question, per_work_plan,
};
use crate::state::AppState;

/// Multipart framing on top of the largest accepted document.
const UPLOAD_OVERHEAD_BYTES: usize = 64 * 1024;

/// Routes mounted at `/per`.
///
/// Reads require authentication; writes require the `editor` role.
///
/// ```text
/// GET    /questions                 -> per_question::list (?area=)
/// GET    /questions/{code}          -> per_question::get_by_code
///
/// GET    /phases                    -> per_phase::list
/// PUT    /phases/{country_id}       -> per_phase::upsert
///
/// GET    /drafts                    -> per_draft::list (?country=&code=)
/// POST   /drafts                    -> per_draft::create
/// DELETE /drafts/{id}               -> per_draft::delete
///
/// GET    /forms                     -> per_form::list (?country=&code=)
/// POST   /forms                     -> per_form::create
/// GET    /forms/{id}                -> per_form::get_by_id
/// PUT    /forms/{id}                -> per_form::update
/// DELETE /forms/{id}                -> per_form::delete
/// GET    /forms/{id}/data           -> per_form::list_data
/// PUT    /forms/{id}/data           -> per_form::upsert_data
/// POST   /forms/{id}/finalize       -> per_form::finalize
///
/// GET    /work-plans                -> per_work_plan::list (?country=)
/// POST   /work-plans                -> per_work_plan::create
/// GET    /work-plans/{id}           -> per_work_plan::get_by_id
/// PUT    /work-plans/{id}           -> per_work_plan::update
/// DELETE /work-plans/{id}           -> per_work_plan::delete
///
/// GET    /overviews                 -> per_overview::list (?country=)
/// POST   /overviews                 -> per_overview::create
/// GET    /overviews/{id}            -> per_overview::get_by_id
/// PUT    /overviews/{id}            -> per_overview::update
/// DELETE /overviews/{id}            -> per_overview::delete
///
/// GET    /documents                 -> per_document::list (?country=)
/// POST   /documents                 -> per_document::upload (multipart)
/// GET    /documents/{id}            -> per_document::get_by_id
/// DELETE /documents/{id}            -> per_document::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(per_question::list))
        .route("/questions/{code}", get(per_question::get_by_code))
        .route("/phases", get(per_phase::list))
        .route("/phases/{country_id}", put(per_phase::upsert))
        .route("/drafts", get(per_draft::list).post(per_draft::create))
        .route("/drafts/{id}", delete(per_draft::delete))
        .route("/forms", get(per_form::list).post(per_form::create))
        .route(
            "/forms/{id}",
            get(per_form::get_by_id)
                .put(per_form::update)
                .delete(per_form::delete),
        )
        .route(
            "/forms/{id}/data",
            get(per_form::list_data).put(per_form::upsert_data),
        )
        .route("/forms/{id}/finalize", post(per_form::finalize))
        .route(
            "/work-plans",
            get(per_work_plan::list).post(per_work_plan::create),
        )
        .route(
            "/work-plans/{id}",
            get(per_work_plan::get_by_id)
                .put(per_work_plan::update)
                .delete(per_work_plan::delete),
        )
        .route("/overviews", get(per_overview::list).post(per_overview::create))
        .route(
            "/overviews/{id}",
            get(per_overview::get_by_id)
                .put(per_overview::update)
                .delete(per_overview::delete),
        )
        .route(
            "/documents",
            get(per_document::list)
                .post(per_document::upload)
                .layer(DefaultBodyLimit::max(MAX_DOCUMENT_BYTES + UPLOAD_OVERHEAD_BYTES)),
        )
        .route(
            "/documents/{id}",
            get(per_document::get_by_id).delete(per_document::delete),
        )
}
