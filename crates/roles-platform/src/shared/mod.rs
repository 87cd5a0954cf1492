//! Shared infrastructure: errors, response envelope, health, app assembly

pub mod api_common;
pub mod app;
pub mod error;
pub mod health_api;
