//! Liveness check.
//!
//! Answers without touching the database or the generation service.

pub mod handlers;
pub mod routes;
