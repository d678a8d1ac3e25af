//! Filter Model
//!
//! Search text, consultation mode, specialties and sort key for the listing.
//! Mutated only through `logic::reducer`.

use crate::{ConsultMode, SortKey};

/// Current filter and sort selection of the listing view
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring matched against doctor names
    pub search: String,

    /// At most one consultation mode
    pub consult: Option<ConsultMode>,

    /// Selected specialty names in selection order, unique ignoring case
    pub specialties: Vec<String>,

    /// At most one sort key
    pub sort: Option<SortKey>,
}

impl FilterState {
    /// True when nothing narrows or reorders the list
    pub fn is_default(&self) -> bool {
        self.search.is_empty()
            && self.consult.is_none()
            && self.specialties.is_empty()
            && self.sort.is_none()
    }

    /// Case-insensitive specialty membership
    pub fn has_specialty(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.specialties.iter().any(|s| s.to_lowercase() == name)
    }

    /// Add a specialty unless one differing only by case is already selected
    pub fn insert_specialty(&mut self, name: &str) {
        if !name.is_empty() && !self.has_specialty(name) {
            self.specialties.push(name.to_string());
        }
    }

    /// Remove every entry equal to `name` ignoring case
    pub fn remove_specialty(&mut self, name: &str) {
        let name = name.to_lowercase();
        self.specialties.retain(|s| s.to_lowercase() != name);
    }
}

/// Partial update merged into a `FilterState`; `None` fields are left alone
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub search: Option<String>,
    pub consult: Option<Option<ConsultMode>>,
    pub specialties: Option<Vec<String>>,
    pub sort: Option<Option<SortKey>>,
}
