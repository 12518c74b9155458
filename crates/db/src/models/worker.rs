//! Worker entity model and DTOs.

use serde::{Deserialize, Serialize};
use sitecrew_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A worker row from the `workers` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Worker {
    #[schema(value_type = i64)]
    pub id: DbId,
    pub name: String,
    pub role: String,
    /// The job this worker is assigned to.
    #[schema(value_type = i64)]
    pub job_id: DbId,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// DTO for creating a new worker. Every field is required.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateWorker {
    #[validate(length(min = 1, max = 50, message = "name must be 1 to 50 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "role must be 1 to 50 characters"))]
    pub role: String,
    #[schema(value_type = i64)]
    pub job_id: DbId,
}

/// DTO for updating an existing worker. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateWorker {
    #[validate(length(min = 1, max = 50, message = "name must be 1 to 50 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50, message = "role must be 1 to 50 characters"))]
    pub role: Option<String>,
    #[schema(value_type = Option<i64>)]
    pub job_id: Option<DbId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_worker_requires_job_id() {
        let result = serde_json::from_value::<CreateWorker>(
            serde_json::json!({"name": "Dana", "role": "Electrician"}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn create_worker_rejects_wrong_job_id_type() {
        let result = serde_json::from_value::<CreateWorker>(
            serde_json::json!({"name": "Dana", "role": "Electrician", "job_id": "seven"}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn update_worker_validates_present_fields_only() {
        let input = UpdateWorker {
            role: Some(String::new()),
            ..UpdateWorker::default()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("role"));
        assert!(!errors.field_errors().contains_key("name"));
    }
}
