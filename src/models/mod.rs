// src/models/mod.rs
mod project_check;

pub use project_check::{ProjectCheck, ProjectCheckRequest, Record};
