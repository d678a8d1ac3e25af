//! API Response Handler
//!
//! Hands directory fetch results from the background service to the page view
//! that requested them.

use docfinder::model::{DetailState, LoadStatus, View};
use docfinder::services::ApiResponse;

use crate::App;

/// Handle API response from background service
///
/// A result is only applied if its view id still names the active page view;
/// results for views the user has navigated away from are dropped.
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::DirectoryResult { view_id, doctors } => {
            if !app.model.apply_fetch(view_id, doctors) {
                tracing::warn!(
                    view_id,
                    active_view = app.model.navigation.view_id,
                    "discarding result for inactive view"
                );
                return;
            }

            match &app.model.view {
                View::Listing(listing) => match &listing.status {
                    LoadStatus::Failed { error_type, message } => {
                        tracing::warn!(view_id, ?error_type, %message, "listing failed to load");
                    }
                    _ => tracing::debug!(
                        view_id,
                        total = listing.doctors.len(),
                        visible = listing.visible.len(),
                        "listing loaded"
                    ),
                },
                View::Detail(detail) => match &detail.state {
                    DetailState::NotFound => {
                        tracing::debug!(view_id, id = %detail.doctor_id, "doctor not found");
                    }
                    DetailState::NetworkError { error_type, message } => {
                        tracing::warn!(view_id, ?error_type, %message, "doctor fetch failed");
                    }
                    _ => tracing::debug!(view_id, id = %detail.doctor_id, "doctor loaded"),
                },
            }
        }
    }
}
