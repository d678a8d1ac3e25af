//! Navigation selection logic
//!
//! Pure functions for moving and restoring list selections.

use crate::api::Doctor;

/// Calculate the next selection index with wrapping
///
/// # Examples
/// ```
/// use docfinder::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// # Examples
/// ```
/// use docfinder::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(1), 3), Some(0));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) if i >= list_len => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Position of a doctor in a list by identifier
pub fn find_doctor_index_by_id(doctors: &[Doctor], id: &str) -> Option<usize> {
    doctors.iter().position(|doctor| doctor.id == id)
}

/// Selection after the list was re-derived
///
/// Keeps the previously selected doctor if it is still visible, otherwise
/// the first row; `None` for an empty list.
pub fn restore_selection(doctors: &[Doctor], previous_id: Option<&str>) -> Option<usize> {
    if doctors.is_empty() {
        return None;
    }

    previous_id
        .and_then(|id| find_doctor_index_by_id(doctors, id))
        .or(Some(0))
}
