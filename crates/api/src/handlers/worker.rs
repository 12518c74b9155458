//! Handlers for the `/workers` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sitecrew_core::error::CoreError;
use sitecrew_core::types::DbId;
use sitecrew_db::models::worker::{CreateWorker, UpdateWorker, Worker};
use sitecrew_db::repositories::WorkerRepo;

use crate::error::{AppError, AppResult, ErrorBody};
use crate::extract::{PathParam, QueryParams, ValidatedJson};
use crate::query::WorkerListParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Worker",
        id,
    })
}

/// Turn a foreign key violation on `workers.job_id` into a client error
/// naming the missing job.
fn map_job_reference(err: sqlx::Error, job_id: Option<DbId>) -> AppError {
    match job_id {
        Some(job_id) if sitecrew_db::is_foreign_key_violation(&err) => {
            AppError::Core(CoreError::InvalidReference {
                entity: "Job",
                id: job_id,
            })
        }
        _ => AppError::Database(err),
    }
}

/// POST /api/v1/workers
#[utoipa::path(
    post,
    path = "/api/v1/workers",
    tag = "workers",
    request_body = CreateWorker,
    responses(
        (status = 201, description = "Worker created", body = Worker),
        (status = 400, description = "Malformed or invalid body", body = ErrorBody),
        (status = 422, description = "Referenced job does not exist", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateWorker>,
) -> AppResult<(StatusCode, Json<Worker>)> {
    let worker = WorkerRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_job_reference(err, Some(input.job_id)))?;
    tracing::info!(worker_id = worker.id, job_id = worker.job_id, "Worker created");
    Ok((StatusCode::CREATED, Json(worker)))
}

/// GET /api/v1/workers
#[utoipa::path(
    get,
    path = "/api/v1/workers",
    tag = "workers",
    params(WorkerListParams),
    responses((status = 200, description = "Workers", body = Vec<Worker>))
)]
pub async fn list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<WorkerListParams>,
) -> AppResult<Json<Vec<Worker>>> {
    let workers = WorkerRepo::list(&state.pool, params.job_id).await?;
    Ok(Json(workers))
}

/// GET /api/v1/workers/{id}
#[utoipa::path(
    get,
    path = "/api/v1/workers/{id}",
    tag = "workers",
    params(("id" = i64, Path, description = "Worker id")),
    responses(
        (status = 200, description = "The worker", body = Worker),
        (status = 404, description = "No such worker", body = ErrorBody),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Worker>> {
    let worker = WorkerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(worker))
}

/// PUT /api/v1/workers/{id} (also mounted as PATCH)
#[utoipa::path(
    put,
    path = "/api/v1/workers/{id}",
    tag = "workers",
    params(("id" = i64, Path, description = "Worker id")),
    request_body = UpdateWorker,
    responses(
        (status = 200, description = "Updated worker", body = Worker),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 404, description = "No such worker", body = ErrorBody),
        (status = 422, description = "Referenced job does not exist", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateWorker>,
) -> AppResult<Json<Worker>> {
    let worker = WorkerRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_job_reference(err, input.job_id))?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(worker_id = worker.id, job_id = worker.job_id, "Worker updated");
    Ok(Json(worker))
}

/// DELETE /api/v1/workers/{id}
///
/// Returns the deleted worker.
#[utoipa::path(
    delete,
    path = "/api/v1/workers/{id}",
    tag = "workers",
    params(("id" = i64, Path, description = "Worker id")),
    responses(
        (status = 200, description = "Deleted worker", body = Worker),
        (status = 404, description = "No such worker", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Worker>> {
    let worker = WorkerRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(worker_id = worker.id, "Worker deleted");
    Ok(Json(worker))
}
