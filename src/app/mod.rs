//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule orchestrates between:
//! - Model state (pure, in docfinder::model)
//! - The background fetch service
//! - Logic (pure business logic in docfinder::logic)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod filters;
pub(crate) mod navigation;
