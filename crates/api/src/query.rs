//! Query-string parameter types for list endpoints.

use chrono::NaiveDate;
use serde::Deserialize;
use sitecrew_core::job::{JobFilter, JobListQuery};
use sitecrew_core::types::DbId;
use utoipa::IntoParams;

use crate::error::AppResult;

/// `GET /jobs` filters, sorting and pagination.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct JobListParams {
    /// Exact job name.
    pub name: Option<String>,
    /// Exact customer name.
    pub customer: Option<String>,
    /// Only jobs starting on or after this date.
    pub start_after: Option<NaiveDate>,
    /// Only jobs ending on or before this date.
    pub end_before: Option<NaiveDate>,
    /// 1 = in progress, 2 = completed.
    pub status_id: Option<i16>,
    /// `name`, `customer`, `start_date` (default), `end_date` or `status`.
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`.
    pub sort_order: Option<String>,
    /// 1-based page number.
    pub page: Option<i64>,
    /// Page size, clamped to 1..=100. Omit both `page` and `limit` for all rows.
    pub limit: Option<i64>,
}

impl JobListParams {
    /// Check the raw values and build the repository query.
    pub fn into_query(self) -> AppResult<JobListQuery> {
        let filter = JobFilter {
            name: self.name,
            customer: self.customer,
            start_after: self.start_after,
            end_before: self.end_before,
            status_id: self.status_id,
        };
        let query = JobListQuery::from_raw(
            filter,
            self.sort_by.as_deref(),
            self.sort_order.as_deref(),
            self.page,
            self.limit,
        )?;
        Ok(query)
    }
}

/// `GET /workers` filter.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WorkerListParams {
    /// Only workers assigned to this job.
    #[param(value_type = Option<i64>)]
    pub job_id: Option<DbId>,
}
