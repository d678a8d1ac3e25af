//! Sorting comparison logic
//!
//! Pure functions for comparing doctors by the numbers embedded in their
//! free-text fee and experience strings.

use std::cmp::Ordering;

use crate::api::Doctor;
use crate::SortKey;

/// First contiguous run of ASCII digits in `text`, or 0 when there is none
///
/// Runs too long for `u64` saturate at `u64::MAX`.
///
/// # Examples
/// ```
/// use docfinder::logic::sorting::extract_number;
///
/// assert_eq!(extract_number("13 Years of experience"), 13);
/// assert_eq!(extract_number("₹500"), 500);
/// assert_eq!(extract_number(""), 0);
/// assert_eq!(extract_number("No digits here"), 0);
/// ```
pub fn extract_number(text: &str) -> u64 {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return 0;
    }

    digits.parse().unwrap_or(u64::MAX)
}

/// Lowest fee first
pub fn compare_by_fee(a: &Doctor, b: &Doctor) -> Ordering {
    extract_number(&a.fees).cmp(&extract_number(&b.fees))
}

/// Most experience first
pub fn compare_by_experience(a: &Doctor, b: &Doctor) -> Ordering {
    extract_number(&b.experience).cmp(&extract_number(&a.experience))
}

/// Compare two doctors under an optional sort key; no key means "equal"
pub fn compare_doctors(a: &Doctor, b: &Doctor, sort: Option<SortKey>) -> Ordering {
    match sort {
        Some(SortKey::FeesAscending) => compare_by_fee(a, b),
        Some(SortKey::ExperienceDescending) => compare_by_experience(a, b),
        None => Ordering::Equal,
    }
}

/// Stable in-place sort; equal doctors keep their relative order
pub fn sort_doctors(doctors: &mut [Doctor], sort: Option<SortKey>) {
    if sort.is_none() {
        return;
    }
    doctors.sort_by(|a, b| compare_doctors(a, b, sort));
}
