//! Navigation Model
//!
//! The current location, the back history, and the id of the active page view.

use crate::logic::route::LISTING_PATH;

/// Location bar state
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Location of the active page view (path plus query)
    pub location: String,

    /// Earlier locations, most recent last
    pub history: Vec<String>,

    /// Incremented for every page view; fetch results carry the id they were
    /// requested for
    pub view_id: u64,
}

impl NavigationModel {
    pub fn new(location: String) -> Self {
        Self {
            location,
            history: Vec::new(),
            view_id: 0,
        }
    }

    /// Start a new page view and return its id
    pub fn begin_view(&mut self) -> u64 {
        self.view_id += 1;
        self.view_id
    }

    /// Whether a result for `view_id` still belongs to the active view
    pub fn is_active(&self, view_id: u64) -> bool {
        self.view_id == view_id
    }

    /// Navigate to a new location, remembering the current one
    pub fn push(&mut self, location: String) {
        let previous = std::mem::replace(&mut self.location, location);
        self.history.push(previous);
    }

    /// Rewrite the current location without a history entry
    pub fn replace(&mut self, location: String) {
        self.location = location;
    }

    /// Return to the previous location, if any
    pub fn back(&mut self) -> Option<&str> {
        let previous = self.history.pop()?;
        self.location = previous;
        Some(&self.location)
    }

    /// Navigate to the plain listing
    pub fn home(&mut self) {
        self.push(LISTING_PATH.to_string());
    }
}
