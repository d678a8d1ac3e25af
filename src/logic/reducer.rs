//! Filter state reducer
//!
//! `(FilterState, Action) -> FilterState`. Every user change to the listing's
//! filters goes through `reduce`; the caller re-derives the visible list and
//! rewrites the location afterwards.

use crate::model::filters::{FilterState, FilterUpdate};
use crate::{ConsultMode, SortKey};

/// A change to the listing's filters
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Replace the search text
    SetSearch(String),
    /// Select a mode, or clear it when it is already selected
    ToggleConsultMode(ConsultMode),
    /// Add a specialty, or remove it when present (ignoring case)
    ToggleSpecialty(String),
    /// Select a sort key, or clear it when it is already selected
    ToggleSort(SortKey),
    /// Merge a partial update
    Merge(FilterUpdate),
    /// Back to defaults
    Reset,
}

pub fn reduce(state: &FilterState, action: Action) -> FilterState {
    let mut next = state.clone();

    match action {
        Action::SetSearch(text) => {
            next.search = text;
        }
        Action::ToggleConsultMode(mode) => {
            next.consult = if next.consult.as_ref() == Some(&mode) {
                None
            } else {
                Some(mode)
            };
        }
        Action::ToggleSpecialty(name) => {
            if next.has_specialty(&name) {
                next.remove_specialty(&name);
            } else {
                next.insert_specialty(&name);
            }
        }
        Action::ToggleSort(key) => {
            next.sort = if next.sort == Some(key) { None } else { Some(key) };
        }
        Action::Merge(update) => {
            if let Some(search) = update.search {
                next.search = search;
            }
            if let Some(consult) = update.consult {
                next.consult = consult;
            }
            if let Some(specialties) = update.specialties {
                next.specialties.clear();
                for name in &specialties {
                    next.insert_specialty(name);
                }
            }
            if let Some(sort) = update.sort {
                next.sort = sort;
            }
        }
        Action::Reset => {
            next = FilterState::default();
        }
    }

    next
}
