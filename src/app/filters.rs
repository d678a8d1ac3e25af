//! Filter dispatch and search editing
//!
//! All filter changes go through the reducer. A change re-derives the visible
//! list, rewrites the current location (no history entry, no refetch) and
//! refreshes the search suggestions.

use docfinder::logic;
use docfinder::logic::reducer::Action;
use docfinder::model::FilterUpdate;
use docfinder::{ConsultMode, SortKey};

use crate::App;

impl App {
    /// Apply a filter action to the listing
    pub(crate) fn dispatch(&mut self, action: Action) {
        let Some(listing) = self.model.listing_mut() else {
            return;
        };

        tracing::debug!(?action, "filter action");
        if !listing.apply(action) {
            return;
        }

        let visible = listing.visible.len();
        self.model.sync_location();
        tracing::debug!(location = %self.model.navigation.location, visible, "filters changed");

        if self.model.ui.search_mode {
            self.refresh_suggestions();
        }
    }

    pub(crate) fn toggle_consult_mode(&mut self, mode: ConsultMode) {
        self.dispatch(Action::ToggleConsultMode(mode));
    }

    pub(crate) fn toggle_sort(&mut self, key: SortKey) {
        self.dispatch(Action::ToggleSort(key));
    }

    pub(crate) fn reset_filters(&mut self) {
        self.dispatch(Action::Reset);
    }

    /// Toggle the specialty under the checklist cursor
    pub(crate) fn toggle_specialty_under_cursor(&mut self) {
        let Some(specialty) = self
            .model
            .listing()
            .and_then(|listing| listing.specialty_under_cursor())
            .map(str::to_string)
        else {
            return;
        };

        self.dispatch(Action::ToggleSpecialty(specialty));
    }

    // ============================================================================
    // SEARCH EDITING
    // ============================================================================

    pub(crate) fn enter_search_mode(&mut self) {
        if self.model.listing().is_none() {
            return;
        }
        self.model.ui.search_mode = true;
        self.refresh_suggestions();
    }

    pub(crate) fn push_search_char(&mut self, c: char) {
        let Some(mut search) = self.current_search() else {
            return;
        };
        search.push(c);
        self.dispatch(Action::SetSearch(search));
    }

    pub(crate) fn pop_search_char(&mut self) {
        let Some(mut search) = self.current_search() else {
            return;
        };
        if search.pop().is_some() {
            self.dispatch(Action::SetSearch(search));
        }
    }

    /// Enter in the search box: take the chosen suggestion, then stop editing
    pub(crate) fn accept_search(&mut self) {
        if let Some(name) = self.model.ui.chosen_suggestion().map(str::to_string) {
            self.dispatch(Action::Merge(FilterUpdate {
                search: Some(name),
                ..Default::default()
            }));
        }
        self.model.ui.exit_search();
    }

    /// Esc in the search box: dismiss suggestions first, then stop editing
    pub(crate) fn cancel_search(&mut self) {
        if self.model.ui.suggestions.is_empty() {
            self.model.ui.exit_search();
        } else {
            self.model.ui.clear_suggestions();
        }
    }

    pub(crate) fn next_suggestion(&mut self) {
        let ui = &mut self.model.ui;
        ui.suggestion_index = logic::navigation::next_selection(ui.suggestion_index, ui.suggestions.len());
    }

    pub(crate) fn previous_suggestion(&mut self) {
        let ui = &mut self.model.ui;
        ui.suggestion_index = logic::navigation::prev_selection(ui.suggestion_index, ui.suggestions.len());
    }

    fn current_search(&self) -> Option<String> {
        self.model.listing().map(|listing| listing.filters.search.clone())
    }

    fn refresh_suggestions(&mut self) {
        self.model.refresh_suggestions();
    }
}
