//! Page views, history and list movement
//!
//! Every navigation starts a fresh page view in the model and requests the
//! directory for it. Selection movement works on whichever listing pane has
//! focus.

use docfinder::logic;
use docfinder::logic::route::detail_location;
use docfinder::model::ListingFocus;
use docfinder::services::ApiRequest;

use crate::App;

impl App {
    /// Ask the fetch service for the directory on behalf of a page view
    pub(crate) fn request_directory(&mut self, view_id: u64) {
        tracing::debug!(view_id, location = %self.model.navigation.location, "starting page view");
        if self.api_tx.send(ApiRequest::FetchDirectory { view_id }).is_err() {
            tracing::warn!(view_id, "fetch service is gone; view stays loading");
        }
    }

    /// Open the detail page of the selected doctor
    pub(crate) fn open_selected_doctor(&mut self) {
        let Some(doctor_id) = self
            .model
            .listing()
            .and_then(|listing| listing.selected_doctor())
            .map(|doctor| doctor.id.clone())
        else {
            return;
        };

        let view_id = self.model.open(&detail_location(&doctor_id));
        self.request_directory(view_id);
    }

    /// Return to the previous location
    ///
    /// A detail page reached without history goes to the listing instead.
    pub(crate) fn go_back(&mut self) {
        if let Some(view_id) = self.model.back() {
            self.request_directory(view_id);
        } else if self.model.detail().is_some() {
            self.go_home();
        }
    }

    pub(crate) fn go_home(&mut self) {
        let view_id = self.model.home();
        self.request_directory(view_id);
    }

    /// Re-enter the current location with a fresh fetch
    pub(crate) fn reload(&mut self) {
        let view_id = self.model.begin_view();
        self.request_directory(view_id);
    }

    pub(crate) fn next_item(&mut self) {
        let Some(listing) = self.model.listing_mut() else {
            return;
        };
        match listing.focus {
            ListingFocus::Doctors => {
                listing.selected_index =
                    logic::navigation::next_selection(listing.selected_index, listing.visible.len());
            }
            ListingFocus::Specialties => {
                listing.specialty_cursor = logic::navigation::next_selection(
                    listing.specialty_cursor,
                    listing.specialties.len(),
                );
            }
        }
    }

    pub(crate) fn previous_item(&mut self) {
        let Some(listing) = self.model.listing_mut() else {
            return;
        };
        match listing.focus {
            ListingFocus::Doctors => {
                listing.selected_index =
                    logic::navigation::prev_selection(listing.selected_index, listing.visible.len());
            }
            ListingFocus::Specialties => {
                listing.specialty_cursor = logic::navigation::prev_selection(
                    listing.specialty_cursor,
                    listing.specialties.len(),
                );
            }
        }
    }

    pub(crate) fn jump_to_first(&mut self) {
        let Some(listing) = self.model.listing_mut() else {
            return;
        };
        match listing.focus {
            ListingFocus::Doctors if !listing.visible.is_empty() => listing.selected_index = Some(0),
            ListingFocus::Specialties if !listing.specialties.is_empty() => {
                listing.specialty_cursor = Some(0)
            }
            _ => {}
        }
    }

    pub(crate) fn jump_to_last(&mut self) {
        let Some(listing) = self.model.listing_mut() else {
            return;
        };
        match listing.focus {
            ListingFocus::Doctors => {
                listing.selected_index = listing.visible.len().checked_sub(1);
            }
            ListingFocus::Specialties => {
                listing.specialty_cursor = listing.specialties.len().checked_sub(1);
            }
        }
    }

    /// Switch Up/Down between the doctor list and the specialty checklist
    pub(crate) fn toggle_focus(&mut self) {
        if let Some(listing) = self.model.listing_mut() {
            listing.focus = match listing.focus {
                ListingFocus::Doctors => ListingFocus::Specialties,
                ListingFocus::Specialties => ListingFocus::Doctors,
            };
        }
    }
}
