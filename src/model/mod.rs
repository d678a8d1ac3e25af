//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **NavigationModel**: Location, back history, active page view id
//! - **View**: The active page (listing or doctor detail)
//! - **UiModel**: Preferences, search editing, suggestions
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: All I/O lives in the app runtime
//! - Every navigation starts a fresh page view; fetch results for older
//!   views are dropped

pub mod detail;
pub mod filters;
pub mod listing;
pub mod navigation;
pub mod ui;

pub use detail::{DetailModel, DetailState};
pub use filters::{FilterState, FilterUpdate};
pub use listing::{ListingFocus, ListingModel};
pub use navigation::NavigationModel;
pub use ui::UiModel;

use crate::api::Doctor;
use crate::error::FetchError;
use crate::logic;
use crate::logic::errors::ErrorType;
use crate::logic::route::{Route, parse_location, route_location};

/// Fetch progress of a listing
#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Loading,
    Failed {
        error_type: ErrorType,
        message: String,
    },
    Loaded,
}

impl LoadStatus {
    pub fn failed(error: &FetchError) -> Self {
        LoadStatus::Failed {
            error_type: logic::errors::classify_error(error),
            message: logic::errors::format_error_message(error),
        }
    }
}

/// The active page
#[derive(Clone, Debug)]
pub enum View {
    Listing(ListingModel),
    Detail(DetailModel),
}

impl View {
    pub fn from_route(route: Route) -> Self {
        match route {
            Route::Listing(filters) => View::Listing(ListingModel::new(filters)),
            Route::Detail { doctor_id } => View::Detail(DetailModel::new(doctor_id)),
        }
    }
}

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub navigation: NavigationModel,
    pub view: View,
    pub ui: UiModel,
}

impl Model {
    /// Model for a startup location; call [`Model::begin_view`] before fetching
    pub fn new(location: &str, vim_mode: bool) -> Self {
        let route = parse_location(location);
        Self {
            navigation: NavigationModel::new(route_location(&route)),
            view: View::from_route(route),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Start a fresh page view for the current location
    ///
    /// Returns the view id the fetch for this view must be tagged with.
    pub fn begin_view(&mut self) -> u64 {
        self.view = View::from_route(parse_location(&self.navigation.location));
        self.ui.exit_search();
        self.navigation.begin_view()
    }

    /// Navigate to `location`, adding a history entry
    pub fn open(&mut self, location: &str) -> u64 {
        let route = parse_location(location);
        self.navigation.push(route_location(&route));
        self.begin_view()
    }

    /// Navigate back; `None` when there is no history
    pub fn back(&mut self) -> Option<u64> {
        self.navigation.back()?;
        Some(self.begin_view())
    }

    /// Navigate to the unfiltered listing
    pub fn home(&mut self) -> u64 {
        self.navigation.home();
        self.begin_view()
    }

    /// Hand a fetch result to the view it was requested for
    ///
    /// Returns false (and changes nothing) when that view is no longer active.
    pub fn apply_fetch(&mut self, view_id: u64, fetched: Result<Vec<Doctor>, FetchError>) -> bool {
        if !self.navigation.is_active(view_id) {
            return false;
        }

        match &mut self.view {
            View::Listing(listing) => match fetched {
                Ok(doctors) => listing.load(doctors),
                Err(error) => listing.fail(&error),
            },
            View::Detail(detail) => detail.resolve(fetched),
        }

        // Search may have been opened while the listing was still loading
        if self.ui.search_mode {
            self.refresh_suggestions();
        }
        true
    }

    /// Recompute autocomplete suggestions from the listing's search text
    ///
    /// The highlight is cleared only when the suggestions actually change.
    pub fn refresh_suggestions(&mut self) {
        let suggestions = match self.listing() {
            Some(listing) => logic::search::suggestions(
                &listing.doctors,
                &listing.filters.search,
                self.ui.suggestion_limit,
            ),
            None => Vec::new(),
        };

        if self.ui.suggestions != suggestions {
            self.ui.suggestions = suggestions;
            self.ui.suggestion_index = None;
        }
    }

    pub fn listing(&self) -> Option<&ListingModel> {
        match &self.view {
            View::Listing(listing) => Some(listing),
            View::Detail(_) => None,
        }
    }

    pub fn listing_mut(&mut self) -> Option<&mut ListingModel> {
        match &mut self.view {
            View::Listing(listing) => Some(listing),
            View::Detail(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailModel> {
        match &self.view {
            View::Detail(detail) => Some(detail),
            View::Listing(_) => None,
        }
    }

    /// Rewrite the location to match the listing filters (no history entry)
    pub fn sync_location(&mut self) {
        if let View::Listing(listing) = &self.view {
            let location = logic::route::listing_location(&listing.filters);
            self.navigation.replace(location);
        }
    }
}
