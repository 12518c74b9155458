//! Route definitions for the `/workers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::worker;
use crate::state::AppState;

/// Routes mounted at `/workers`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// PATCH  /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(worker::list).post(worker::create))
        .route(
            "/{id}",
            get(worker::get_by_id)
                .put(worker::update)
                .patch(worker::update)
                .delete(worker::delete),
        )
}
