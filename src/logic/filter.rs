//! Filter Logic
//!
//! Pure predicates deciding whether a doctor is visible under a `FilterState`,
//! and the derivation of the visible list.

use std::collections::BTreeSet;

use crate::api::Doctor;
use crate::model::filters::FilterState;
use crate::ConsultMode;

/// Case-insensitive substring match against the doctor's name
///
/// # Examples
/// ```
/// use docfinder::api::Doctor;
/// use docfinder::logic::filter::matches_search;
///
/// let doctor = Doctor { name: "Dr. Asha Rao".to_string(), ..Default::default() };
/// assert!(matches_search(&doctor, ""));
/// assert!(matches_search(&doctor, "asha"));
/// assert!(!matches_search(&doctor, "mehta"));
/// ```
pub fn matches_search(doctor: &Doctor, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }

    doctor.name.to_lowercase().contains(&text.to_lowercase())
}

/// True when no mode is selected, or the doctor's flag for the mode is set
///
/// Doctors without clinic info never match a selected mode.
pub fn matches_consultation_mode(doctor: &Doctor, mode: Option<&ConsultMode>) -> bool {
    let Some(mode) = mode else {
        return true;
    };

    let Some(clinic) = &doctor.clinic else {
        return false;
    };

    match mode {
        ConsultMode::VideoConsult => clinic.video_consult,
        ConsultMode::InClinic => clinic.in_clinic,
        ConsultMode::Unrecognized(_) => false,
    }
}

/// True when nothing is selected, or the doctor has any selected specialty
pub fn matches_specialties(doctor: &Doctor, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }

    if doctor.specialties.is_empty() {
        return false;
    }

    let selected: Vec<String> = selected.iter().map(|s| s.to_lowercase()).collect();
    doctor
        .specialties
        .iter()
        .any(|specialty| selected.contains(&specialty.to_lowercase()))
}

/// All three predicates hold
pub fn is_visible(doctor: &Doctor, state: &FilterState) -> bool {
    matches_search(doctor, &state.search)
        && matches_consultation_mode(doctor, state.consult.as_ref())
        && matches_specialties(doctor, &state.specialties)
}

/// Filter then sort, keeping data-source order among equal records
pub fn derive_visible(doctors: &[Doctor], state: &FilterState) -> Vec<Doctor> {
    let mut visible: Vec<Doctor> = doctors
        .iter()
        .filter(|doctor| is_visible(doctor, state))
        .cloned()
        .collect();

    crate::logic::sorting::sort_doctors(&mut visible, state.sort);
    visible
}

/// Every specialty name across the records, sorted and de-duplicated
pub fn available_specialties(doctors: &[Doctor]) -> Vec<String> {
    doctors
        .iter()
        .flat_map(|doctor| doctor.specialties.iter())
        .filter(|name| !name.is_empty())
        .cloned()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Clinic;
    use crate::SortKey;

    fn make_doctor(id: &str, name: &str, clinic: Option<(bool, bool)>, specialties: &[&str]) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: name.to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            clinic: clinic.map(|(video_consult, in_clinic)| Clinic {
                video_consult,
                in_clinic,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_search_matches_all() {
        let doctor = make_doctor("1", "Dr. A", None, &[]);
        assert!(matches_search(&doctor, ""));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let doctor = make_doctor("1", "Dr. Priya Sharma", None, &[]);
        assert!(matches_search(&doctor, "PRIYA"));
        assert!(matches_search(&doctor, "ya sh"));
        assert!(!matches_search(&doctor, "kumar"));
    }

    #[test]
    fn test_unset_mode_matches_all() {
        let doctor = make_doctor("1", "A", None, &[]);
        assert!(matches_consultation_mode(&doctor, None));
    }

    #[test]
    fn test_missing_clinic_never_matches_a_mode() {
        let doctor = make_doctor("1", "A", None, &[]);
        assert!(!matches_consultation_mode(&doctor, Some(&ConsultMode::VideoConsult)));
        assert!(!matches_consultation_mode(&doctor, Some(&ConsultMode::InClinic)));
        assert!(!matches_consultation_mode(
            &doctor,
            Some(&ConsultMode::Unrecognized("Home Visit".to_string()))
        ));
    }

    #[test]
    fn test_mode_uses_matching_flag() {
        let video_only = make_doctor("1", "A", Some((true, false)), &[]);
        assert!(matches_consultation_mode(&video_only, Some(&ConsultMode::VideoConsult)));
        assert!(!matches_consultation_mode(&video_only, Some(&ConsultMode::InClinic)));
    }

    #[test]
    fn test_unrecognized_mode_matches_nothing() {
        let both = make_doctor("1", "A", Some((true, true)), &[]);
        let mode = ConsultMode::Unrecognized("Phone".to_string());
        assert!(!matches_consultation_mode(&both, Some(&mode)));
    }

    #[test]
    fn test_specialties_empty_selection_matches_all() {
        let doctor = make_doctor("1", "A", None, &[]);
        assert!(matches_specialties(&doctor, &[]));
    }

    #[test]
    fn test_specialties_case_insensitive_any() {
        let doctor = make_doctor("1", "A", None, &["Dentist", "Orthodontist"]);
        assert!(matches_specialties(&doctor, &["ORTHODONTIST".to_string()]));
        assert!(matches_specialties(
            &doctor,
            &["Cardiologist".to_string(), "dentist".to_string()]
        ));
        assert!(!matches_specialties(&doctor, &["Cardiologist".to_string()]));
    }

    #[test]
    fn test_doctor_without_specialties_never_matches_selection() {
        let doctor = make_doctor("1", "A", None, &[]);
        assert!(!matches_specialties(&doctor, &["Dentist".to_string()]));
    }

    #[test]
    fn test_in_clinic_filter_keeps_source_order() {
        let doctors = vec![
            make_doctor("1", "A", Some((true, false)), &[]),
            make_doctor("2", "B", Some((false, true)), &[]),
            make_doctor("3", "C", None, &[]),
            make_doctor("4", "D", Some((true, false)), &[]),
            make_doctor("5", "E", Some((true, true)), &[]),
        ];
        let state = FilterState {
            consult: Some(ConsultMode::InClinic),
            ..Default::default()
        };

        let visible = derive_visible(&doctors, &state);
        let ids: Vec<&str> = visible.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "5"]);
    }

    #[test]
    fn test_all_predicates_combined() {
        let doctors = vec![
            make_doctor("1", "Dr. Rao", Some((true, false)), &["Dentist"]),
            make_doctor("2", "Dr. Rao Jr", Some((true, false)), &["Dermatologist"]),
            make_doctor("3", "Dr. Rao Sr", Some((false, true)), &["Dentist"]),
            make_doctor("4", "Dr. Mehta", Some((true, false)), &["Dentist"]),
        ];
        let state = FilterState {
            search: "rao".to_string(),
            consult: Some(ConsultMode::VideoConsult),
            specialties: vec!["dentist".to_string()],
            sort: None,
        };

        let visible = derive_visible(&doctors, &state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn test_derive_visible_sorts_after_filtering() {
        let mut a = make_doctor("1", "A", Some((true, true)), &[]);
        a.fees = "₹800".to_string();
        let mut b = make_doctor("2", "B", None, &[]);
        b.fees = "₹100".to_string();
        let mut c = make_doctor("3", "C", Some((true, true)), &[]);
        c.fees = "₹300".to_string();

        let state = FilterState {
            consult: Some(ConsultMode::VideoConsult),
            sort: Some(SortKey::FeesAscending),
            ..Default::default()
        };
        let visible = derive_visible(&[a, b, c], &state);
        let ids: Vec<&str> = visible.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_available_specialties_sorted_unique() {
        let doctors = vec![
            make_doctor("1", "A", None, &["Dentist", "Orthodontist"]),
            make_doctor("2", "B", None, &["Cardiologist", "Dentist"]),
            make_doctor("3", "C", None, &[]),
        ];
        assert_eq!(
            available_specialties(&doctors),
            vec!["Cardiologist", "Dentist", "Orthodontist"]
        );
    }
}
