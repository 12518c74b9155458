//! Domain types and pure rules for the sitecrew service.
//!
//! Nothing in this crate touches the database or the network.

pub mod error;
pub mod job;
pub mod types;
