//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: Fetch results from the background service
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App and translate events into model changes and
//! fetch requests.

pub mod api;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
