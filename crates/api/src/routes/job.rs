//! Route definitions for the `/jobs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::job;
use crate::state::AppState;

/// Routes mounted at `/jobs`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// PATCH  /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/workers    -> list_workers
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(job::list).post(job::create))
        .route(
            "/{id}",
            get(job::get_by_id)
                .put(job::update)
                .patch(job::update)
                .delete(job::delete),
        )
        .route("/{id}/workers", get(job::list_workers))
}
