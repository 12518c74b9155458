pub mod health;
pub mod job;
pub mod openapi;
pub mod worker;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /jobs                          list, create
/// /jobs/{id}                     get, update (PUT/PATCH), delete
/// /jobs/{id}/workers             workers assigned to the job
///
/// /workers                       list (?job_id=), create
/// /workers/{id}                  get, update (PUT/PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/jobs", job::router())
        .nest("/workers", worker::router())
}
