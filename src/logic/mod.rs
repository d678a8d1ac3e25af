//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - detail: Resolving one doctor from a fetched list
//! - errors: Fetch error classification and display
//! - filter: Visibility predicates and visible-list derivation
//! - formatting: Display text for doctor records
//! - navigation: Selection movement and restoration
//! - query: Filter state to/from query strings
//! - reducer: Filter state transitions
//! - route: Location parsing and building
//! - search: Autocomplete suggestions
//! - sorting: Fee/experience comparators

pub mod detail;
pub mod errors;
pub mod filter;
pub mod formatting;
pub mod navigation;
pub mod query;
pub mod reducer;
pub mod route;
pub mod search;
pub mod sorting;
