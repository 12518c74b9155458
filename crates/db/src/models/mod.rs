//! Row models and request DTOs.

pub mod job;
pub mod status;
pub mod worker;
