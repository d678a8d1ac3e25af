//! Search Logic
//!
//! Autocomplete suggestions for the search box.

use crate::api::Doctor;

/// Default number of suggestions shown under the search box
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Names of the first `limit` doctors whose name contains `query`
///
/// # Rules
/// - Whitespace-only queries produce no suggestions
/// - Matching is the same case-insensitive substring match as the filter
/// - Data-source order, not the current sort order
///
/// # Examples
/// ```
/// use docfinder::api::Doctor;
/// use docfinder::logic::search::suggestions;
///
/// let doctors = vec![
///     Doctor { id: "1".into(), name: "Dr. Asha Rao".into(), ..Default::default() },
///     Doctor { id: "2".into(), name: "Dr. Ravi Rao".into(), ..Default::default() },
/// ];
/// assert_eq!(suggestions(&doctors, "rao", 3), vec!["Dr. Asha Rao", "Dr. Ravi Rao"]);
/// assert!(suggestions(&doctors, "  ", 3).is_empty());
/// ```
pub fn suggestions(doctors: &[Doctor], query: &str, limit: usize) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    doctors
        .iter()
        .filter(|doctor| crate::logic::filter::matches_search(doctor, query))
        .take(limit)
        .map(|doctor| doctor.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_doctor(id: &str, name: &str) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_query_has_no_suggestions() {
        let doctors = vec![make_doctor("1", "Dr. A")];
        assert!(suggestions(&doctors, "", 3).is_empty());
    }

    #[test]
    fn test_suggestions_are_limited() {
        let doctors: Vec<Doctor> = (1..=5)
            .map(|i| make_doctor(&i.to_string(), &format!("Dr. Kumar {}", i)))
            .collect();
        let found = suggestions(&doctors, "kumar", DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(found, vec!["Dr. Kumar 1", "Dr. Kumar 2", "Dr. Kumar 3"]);
    }

    #[test]
    fn test_suggestions_case_insensitive() {
        let doctors = vec![make_doctor("1", "Dr. Meera Iyer"), make_doctor("2", "Dr. Sen")];
        assert_eq!(suggestions(&doctors, "IYER", 3), vec!["Dr. Meera Iyer"]);
    }
}
