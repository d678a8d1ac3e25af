//! Formatting and display logic
//!
//! Pure functions for turning doctor records into display text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::Doctor;

/// "Available For" label of a listing card
///
/// # Examples
/// ```
/// use docfinder::api::{Clinic, Doctor};
/// use docfinder::logic::formatting::availability_label;
///
/// let mut doctor = Doctor::default();
/// assert_eq!(availability_label(&doctor), "Not specified");
///
/// doctor.clinic = Some(Clinic { video_consult: true, in_clinic: true, ..Default::default() });
/// assert_eq!(availability_label(&doctor), "Video Consult, In Clinic");
/// ```
pub fn availability_label(doctor: &Doctor) -> String {
    let Some(clinic) = &doctor.clinic else {
        return "Not specified".to_string();
    };

    let mut modes = Vec::new();
    if clinic.video_consult {
        modes.push("Video Consult");
    }
    if clinic.in_clinic {
        modes.push("In Clinic");
    }
    modes.join(", ")
}

/// Specialties joined with ", "
pub fn specialties_line(doctor: &Doctor) -> String {
    doctor.specialties.join(", ")
}

/// Truncate to a display width, appending "…" when cut
///
/// Width is measured in terminal columns, so wide characters count double.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Clinic;

    fn with_clinic(video_consult: bool, in_clinic: bool) -> Doctor {
        Doctor {
            clinic: Some(Clinic {
                video_consult,
                in_clinic,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_availability_single_modes() {
        assert_eq!(availability_label(&with_clinic(true, false)), "Video Consult");
        assert_eq!(availability_label(&with_clinic(false, true)), "In Clinic");
    }

    #[test]
    fn test_availability_clinic_without_modes_is_blank() {
        assert_eq!(availability_label(&with_clinic(false, false)), "");
    }

    #[test]
    fn test_specialties_line() {
        let doctor = Doctor {
            specialties: vec!["Dentist".to_string(), "Orthodontist".to_string()],
            ..Default::default()
        };
        assert_eq!(specialties_line(&doctor), "Dentist, Orthodontist");
        assert_eq!(specialties_line(&Doctor::default()), "");
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("Dr. Rao", 10), "Dr. Rao");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_to_width("Dr. Ramachandran", 8), "Dr. Ram…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_characters() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("医生医生医生", 5), "医生…");
    }
}
