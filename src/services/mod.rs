//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: Background fetch worker for the doctor directory

pub mod api;

pub use api::{spawn_api_service, ApiRequest, ApiResponse};
