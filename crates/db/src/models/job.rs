//! Job entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sitecrew_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::status::StatusId;

/// A job row from the `jobs` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Job {
    #[schema(value_type = i64)]
    pub id: DbId,
    pub name: String,
    pub customer: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// 1 = in progress, 2 = completed.
    #[schema(value_type = i16)]
    pub status_id: StatusId,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// DTO for creating a new job.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateJob {
    #[validate(length(min = 1, max = 50, message = "name must be 1 to 50 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "customer must be 1 to 50 characters"))]
    pub customer: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Defaults to 1 (in progress) if omitted.
    #[schema(value_type = Option<i16>)]
    pub status_id: Option<StatusId>,
}

/// DTO for updating an existing job. All fields are optional; omitted
/// fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateJob {
    #[validate(length(min = 1, max = 50, message = "name must be 1 to 50 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50, message = "customer must be 1 to 50 characters"))]
    pub customer: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[schema(value_type = Option<i16>)]
    pub status_id: Option<StatusId>,
}
