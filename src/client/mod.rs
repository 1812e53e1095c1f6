// src/client/mod.rs
mod error;
mod health_check;

pub use error::HealthCheckError;
pub use health_check::{HealthCheckApi, HealthCheckClient, CONTEXT_PATH, DEFAULT_HOST};
