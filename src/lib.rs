// src/lib.rs
pub mod client;
pub mod config;
pub mod models;

pub use client::{HealthCheckApi, HealthCheckClient, HealthCheckError};
pub use config::ClientConfig;
pub use models::{ProjectCheck, ProjectCheckRequest, Record};
