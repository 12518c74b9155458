//! Handlers for the `/jobs` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use sitecrew_core::error::CoreError;
use sitecrew_core::job::validate_schedule;
use sitecrew_core::types::DbId;
use sitecrew_db::models::job::{CreateJob, Job, UpdateJob};
use sitecrew_db::models::status::{JobStatus, StatusId};
use sitecrew_db::models::worker::Worker;
use sitecrew_db::repositories::{JobRepo, WorkerRepo};

use crate::error::{AppError, AppResult, ErrorBody};
use crate::extract::{PathParam, QueryParams, ValidatedJson};
use crate::query::JobListParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Job", id })
}

/// Checks the validator derive cannot express: date order and status lookup.
fn validate_fields(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    status_id: Option<StatusId>,
) -> Result<(), CoreError> {
    validate_schedule(start_date, end_date)?;
    if let Some(id) = status_id {
        if JobStatus::from_id(id).is_none() {
            return Err(CoreError::Validation(format!(
                "Unknown status_id {id}. Use 1 (in progress) or 2 (completed)"
            )));
        }
    }
    Ok(())
}

/// POST /api/v1/jobs
#[utoipa::path(
    post,
    path = "/api/v1/jobs",
    tag = "jobs",
    request_body = CreateJob,
    responses(
        (status = 201, description = "Job created", body = Job),
        (status = 400, description = "Malformed or invalid body", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateJob>,
) -> AppResult<(StatusCode, Json<Job>)> {
    validate_fields(input.start_date, input.end_date, input.status_id)?;

    let job = JobRepo::create(&state.pool, &input).await?;
    tracing::info!(job_id = job.id, customer = %job.customer, "Job created");
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/v1/jobs
#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    tag = "jobs",
    params(JobListParams),
    responses(
        (status = 200, description = "Matching jobs", body = Vec<Job>),
        (status = 400, description = "Invalid filter, sort or page", body = ErrorBody),
    )
)]
pub async fn list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<JobListParams>,
) -> AppResult<Json<Vec<Job>>> {
    let query = params.into_query()?;
    let jobs = JobRepo::list(&state.pool, &query).await?;
    Ok(Json(jobs))
}

/// GET /api/v1/jobs/{id}
#[utoipa::path(
    get,
    path = "/api/v1/jobs/{id}",
    tag = "jobs",
    params(("id" = i64, Path, description = "Job id")),
    responses(
        (status = 200, description = "The job", body = Job),
        (status = 404, description = "No such job", body = ErrorBody),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Job>> {
    let job = JobRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(job))
}

/// PUT /api/v1/jobs/{id} (also mounted as PATCH)
///
/// Omitted fields keep their stored value.
#[utoipa::path(
    put,
    path = "/api/v1/jobs/{id}",
    tag = "jobs",
    params(("id" = i64, Path, description = "Job id")),
    request_body = UpdateJob,
    responses(
        (status = 200, description = "Updated job", body = Job),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 404, description = "No such job", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateJob>,
) -> AppResult<Json<Job>> {
    validate_fields(input.start_date, input.end_date, input.status_id)?;

    let job = JobRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(job_id = job.id, "Job updated");
    Ok(Json(job))
}

/// DELETE /api/v1/jobs/{id}
///
/// Returns the deleted job. A job with assigned workers is not deleted (409).
#[utoipa::path(
    delete,
    path = "/api/v1/jobs/{id}",
    tag = "jobs",
    params(("id" = i64, Path, description = "Job id")),
    responses(
        (status = 200, description = "Deleted job", body = Job),
        (status = 404, description = "No such job", body = ErrorBody),
        (status = 409, description = "Job still has workers", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Job>> {
    match JobRepo::delete(&state.pool, id).await {
        Ok(Some(job)) => {
            tracing::info!(job_id = job.id, "Job deleted");
            Ok(Json(job))
        }
        Ok(None) => Err(not_found(id)),
        Err(err) if sitecrew_db::is_foreign_key_violation(&err) => {
            let workers = JobRepo::count_workers(&state.pool, id).await?;
            Err(AppError::Core(CoreError::Conflict(format!(
                "Job {id} still has {workers} assigned worker(s); reassign or delete them first"
            ))))
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /api/v1/jobs/{id}/workers
#[utoipa::path(
    get,
    path = "/api/v1/jobs/{id}/workers",
    tag = "jobs",
    params(("id" = i64, Path, description = "Job id")),
    responses(
        (status = 200, description = "Workers assigned to the job", body = Vec<Worker>),
        (status = 404, description = "No such job", body = ErrorBody),
    )
)]
pub async fn list_workers(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Vec<Worker>>> {
    JobRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let workers = WorkerRepo::list(&state.pool, Some(id)).await?;
    Ok(Json(workers))
}
