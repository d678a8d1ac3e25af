//! Listing Model
//!
//! Full record set, filter state and the derived visible list of the
//! listing view.

use super::filters::{FilterState, FilterUpdate};
use super::LoadStatus;
use crate::api::Doctor;
use crate::error::FetchError;
use crate::logic;
use crate::logic::reducer::Action;

pub const FETCH_ERROR_MESSAGE: &str = "Failed to load doctors. Please try again later.";
pub const NO_MATCHES_MESSAGE: &str = "No doctors match your search criteria.";

/// Which listing pane receives Up/Down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingFocus {
    Doctors,
    Specialties,
}

#[derive(Clone, Debug)]
pub struct ListingModel {
    pub status: LoadStatus,

    /// Every doctor from the fetch, in data-source order; never edited
    pub doctors: Vec<Doctor>,

    pub filters: FilterState,

    /// `derive_visible(doctors, filters)`, refreshed on every change
    pub visible: Vec<Doctor>,

    /// Specialty checklist entries
    pub specialties: Vec<String>,

    pub selected_index: Option<usize>,
    pub specialty_cursor: Option<usize>,
    pub focus: ListingFocus,
}

impl ListingModel {
    /// A listing that is waiting for its fetch
    pub fn new(filters: FilterState) -> Self {
        Self {
            status: LoadStatus::Loading,
            doctors: Vec::new(),
            filters,
            visible: Vec::new(),
            specialties: Vec::new(),
            selected_index: None,
            specialty_cursor: None,
            focus: ListingFocus::Doctors,
        }
    }

    /// Install the fetched records
    pub fn load(&mut self, doctors: Vec<Doctor>) {
        self.specialties = logic::filter::available_specialties(&doctors);
        self.specialty_cursor = if self.specialties.is_empty() { None } else { Some(0) };
        self.doctors = doctors;
        self.status = LoadStatus::Loaded;
        self.rederive();
    }

    pub fn fail(&mut self, error: &FetchError) {
        self.status = LoadStatus::failed(error);
    }

    /// Apply a filter action; returns whether the filters changed
    pub fn apply(&mut self, action: Action) -> bool {
        let next = logic::reducer::reduce(&self.filters, action);
        if next == self.filters {
            return false;
        }

        self.filters = next;
        self.rederive();
        true
    }

    /// Merge a partial filter update; returns whether the filters changed
    pub fn set_filter(&mut self, update: FilterUpdate) -> bool {
        self.apply(Action::Merge(update))
    }

    /// Recompute the visible list, keeping the selected doctor when possible
    pub fn rederive(&mut self) {
        let previous_id = self.selected_doctor().map(|d| d.id.clone());
        self.visible = logic::filter::derive_visible(&self.doctors, &self.filters);
        self.selected_index =
            logic::navigation::restore_selection(&self.visible, previous_id.as_deref());
    }

    pub fn selected_doctor(&self) -> Option<&Doctor> {
        self.selected_index.and_then(|idx| self.visible.get(idx))
    }

    pub fn specialty_under_cursor(&self) -> Option<&str> {
        self.specialty_cursor
            .and_then(|idx| self.specialties.get(idx))
            .map(String::as_str)
    }

    /// Inline message replacing the list, if any
    pub fn message(&self) -> Option<&'static str> {
        match self.status {
            LoadStatus::Loading => None,
            LoadStatus::Failed { .. } => Some(FETCH_ERROR_MESSAGE),
            LoadStatus::Loaded if self.visible.is_empty() => Some(NO_MATCHES_MESSAGE),
            LoadStatus::Loaded => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConsultMode;

    fn make_doctor(id: &str, name: &str) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: name.to_string(),
            specialties: vec!["Dentist".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_new_listing_is_loading() {
        let listing = ListingModel::new(FilterState::default());
        assert_eq!(listing.status, LoadStatus::Loading);
        assert!(listing.message().is_none());
    }

    #[test]
    fn test_load_derives_visible_and_catalog() {
        let mut listing = ListingModel::new(FilterState::default());
        listing.load(vec![make_doctor("1", "A"), make_doctor("2", "B")]);
        assert_eq!(listing.visible.len(), 2);
        assert_eq!(listing.specialties, vec!["Dentist"]);
        assert_eq!(listing.selected_index, Some(0));
    }

    #[test]
    fn test_initial_filters_apply_on_load() {
        let filters = FilterState {
            search: "b".to_string(),
            ..Default::default()
        };
        let mut listing = ListingModel::new(filters);
        listing.load(vec![make_doctor("1", "A"), make_doctor("2", "B")]);
        assert_eq!(listing.visible.len(), 1);
        assert_eq!(listing.visible[0].id, "2");
    }

    #[test]
    fn test_apply_reports_change() {
        let mut listing = ListingModel::new(FilterState::default());
        listing.load(vec![make_doctor("1", "A")]);
        assert!(listing.apply(Action::SetSearch("zzz".to_string())));
        assert!(!listing.apply(Action::SetSearch("zzz".to_string())));
        assert_eq!(listing.message(), Some(NO_MATCHES_MESSAGE));
    }

    #[test]
    fn test_apply_keeps_selected_doctor() {
        let mut listing = ListingModel::new(FilterState::default());
        listing.load(vec![
            make_doctor("1", "Dr. Alpha"),
            make_doctor("2", "Dr. Beta"),
            make_doctor("3", "Dr. Bravo"),
        ]);
        listing.selected_index = Some(2);

        listing.apply(Action::SetSearch("dr. b".to_string()));
        assert_eq!(listing.selected_doctor().map(|d| d.id.as_str()), Some("3"));
    }

    #[test]
    fn test_set_filter_merges_partial_update() {
        let mut listing = ListingModel::new(FilterState {
            search: "dr".to_string(),
            ..Default::default()
        });
        listing.load(vec![make_doctor("1", "Dr. A"), make_doctor("2", "Dr. B")]);

        let changed = listing.set_filter(FilterUpdate {
            consult: Some(Some(ConsultMode::VideoConsult)),
            ..Default::default()
        });
        assert!(changed);
        assert_eq!(listing.filters.search, "dr");
        assert_eq!(listing.filters.consult, Some(ConsultMode::VideoConsult));
        assert!(listing.visible.is_empty());
    }

    #[test]
    fn test_failed_listing_shows_fetch_message() {
        let mut listing = ListingModel::new(FilterState::default());
        listing.fail(&FetchError::Status {
            url: "http://localhost/doctors.json".to_string(),
            status: 500,
        });
        assert_eq!(listing.message(), Some(FETCH_ERROR_MESSAGE));
    }

    #[test]
    fn test_doctors_untouched_by_filtering() {
        let mut listing = ListingModel::new(FilterState::default());
        listing.load(vec![make_doctor("1", "A"), make_doctor("2", "B")]);
        listing.apply(Action::ToggleConsultMode(ConsultMode::InClinic));
        assert!(listing.visible.is_empty());
        assert_eq!(listing.doctors.len(), 2);
    }
}
