//! Postgres persistence for jobs and workers.
//!
//! Pool bootstrap, embedded migrations, row models with their request DTOs,
//! and one repository per table.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// SQLSTATE for `check_violation`.
const CHECK_VIOLATION: &str = "23514";

/// Create a connection pool from structured connect options.
pub async fn create_pool(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

fn has_sqlstate(err: &sqlx::Error, code: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(code),
        _ => false,
    }
}

/// True when `err` is a Postgres foreign key violation.
///
/// Raised both when a child row points at a missing parent and when a parent
/// with `ON DELETE RESTRICT` children is deleted.
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    has_sqlstate(err, FOREIGN_KEY_VIOLATION)
}

/// True when `err` is a Postgres CHECK constraint violation.
pub fn is_check_violation(err: &sqlx::Error) -> bool {
    has_sqlstate(err, CHECK_VIOLATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_not_constraint_violations() {
        let err = sqlx::Error::RowNotFound;
        assert!(!is_foreign_key_violation(&err));
        assert!(!is_check_violation(&err));
    }
}
