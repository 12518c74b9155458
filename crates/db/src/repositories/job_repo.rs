//! Repository for the `jobs` table.

use sitecrew_core::job::JobListQuery;
use sitecrew_core::types::DbId;
use sqlx::PgPool;

use crate::models::job::{CreateJob, Job, UpdateJob};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, customer, start_date, end_date, status_id, created_at, updated_at";

/// Provides CRUD operations for jobs.
pub struct JobRepo;

impl JobRepo {
    /// Insert a new job, returning the created row.
    ///
    /// If `status_id` is `None` in the input, defaults to 1 (in progress).
    pub async fn create(pool: &PgPool, input: &CreateJob) -> Result<Job, sqlx::Error> {
        let query = format!(
            "INSERT INTO jobs (name, customer, start_date, end_date, status_id)
             VALUES ($1, $2, $3, $4, COALESCE($5, 1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(&input.name)
            .bind(&input.customer)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status_id)
            .fetch_one(pool)
            .await
    }

    /// Find a job by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE id = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List jobs matching `params.filter`, ordered and optionally paginated.
    ///
    /// Ties on the sort column are broken by `id` so pages are stable.
    pub async fn list(pool: &PgPool, params: &JobListQuery) -> Result<Vec<Job>, sqlx::Error> {
        let mut query = format!(
            "SELECT {COLUMNS} FROM jobs
             WHERE ($1::TEXT IS NULL OR name = $1)
               AND ($2::TEXT IS NULL OR customer = $2)
               AND ($3::DATE IS NULL OR start_date >= $3)
               AND ($4::DATE IS NULL OR end_date <= $4)
               AND ($5::SMALLINT IS NULL OR status_id = $5)
             ORDER BY {} {}, id ASC",
            params.sort_by.column(),
            params.sort_order.as_sql(),
        );
        if params.page.is_some() {
            query.push_str(" LIMIT $6 OFFSET $7");
        }

        let filter = &params.filter;
        let mut q = sqlx::query_as::<_, Job>(&query)
            .bind(&filter.name)
            .bind(&filter.customer)
            .bind(filter.start_after)
            .bind(filter.end_before)
            .bind(filter.status_id);
        if let Some(page) = params.page {
            q = q.bind(page.limit).bind(page.offset);
        }
        q.fetch_all(pool).await
    }

    /// Update a job. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJob,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET
                name = COALESCE($2, name),
                customer = COALESCE($3, customer),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                status_id = COALESCE($6, status_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.customer)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a job, returning the removed row, or `None` if it did not exist.
    ///
    /// Fails with a foreign key violation while workers still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("DELETE FROM jobs WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Number of workers assigned to a job.
    pub async fn count_workers(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM workers WHERE job_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
