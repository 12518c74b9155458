//! OpenAPI 3 document describing the `/api/v1` surface.

use axum::{routing::get, Json, Router};
use sitecrew_db::models::job::{CreateJob, Job, UpdateJob};
use sitecrew_db::models::worker::{CreateWorker, UpdateWorker, Worker};
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers::{job, worker};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "sitecrew",
        description = "Construction jobs and the workers assigned to them."
    ),
    paths(
        job::list,
        job::create,
        job::get_by_id,
        job::update,
        job::delete,
        job::list_workers,
        worker::list,
        worker::create,
        worker::get_by_id,
        worker::update,
        worker::delete,
    ),
    components(schemas(Job, CreateJob, UpdateJob, Worker, CreateWorker, UpdateWorker, ErrorBody)),
    tags(
        (name = "jobs", description = "Construction jobs"),
        (name = "workers", description = "Workers assigned to jobs"),
    )
)]
pub struct ApiDoc;

/// GET /openapi.json
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Mount the document at the root, next to `/health`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}
