//! Repository for the `workers` table.

use sitecrew_core::types::DbId;
use sqlx::PgPool;

use crate::models::worker::{CreateWorker, UpdateWorker, Worker};

const COLUMNS: &str = "id, name, role, job_id, created_at, updated_at";

/// Provides CRUD operations for workers.
pub struct WorkerRepo;

impl WorkerRepo {
    /// Insert a new worker, returning the created row.
    ///
    /// Fails with a foreign key violation if `job_id` does not exist.
    pub async fn create(pool: &PgPool, input: &CreateWorker) -> Result<Worker, sqlx::Error> {
        let query = format!(
            "INSERT INTO workers (name, role, job_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Worker>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(input.job_id)
            .fetch_one(pool)
            .await
    }

    /// Find a worker by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Worker>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workers WHERE id = $1");
        sqlx::query_as::<_, Worker>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List workers ordered by ID, optionally restricted to a single job.
    pub async fn list(pool: &PgPool, job_id: Option<DbId>) -> Result<Vec<Worker>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workers
             WHERE ($1::BIGINT IS NULL OR job_id = $1)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Worker>(&query)
            .bind(job_id)
            .fetch_all(pool)
            .await
    }

    /// Update a worker. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWorker,
    ) -> Result<Option<Worker>, sqlx::Error> {
        let query = format!(
            "UPDATE workers SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                job_id = COALESCE($4, job_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Worker>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(input.job_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a worker, returning the removed row, or `None` if it did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Worker>, sqlx::Error> {
        let query = format!("DELETE FROM workers WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Worker>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
