//! One repository per table. Each is a unit struct with associated
//! functions taking a `&PgPool`.

pub mod job_repo;
pub mod worker_repo;

pub use job_repo::JobRepo;
pub use worker_repo::WorkerRepo;
