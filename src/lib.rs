//! Doctor directory TUI library
//!
//! Exposes modules for testing

pub mod api;
pub mod error;
pub mod logic;
pub mod model;
pub mod services;

/// Consultation mode selector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConsultMode {
    VideoConsult,
    InClinic,
    /// A label that arrived through the location but names no known mode.
    /// Kept so the location round-trips; it matches no record.
    Unrecognized(String),
}

impl ConsultMode {
    /// Parse a `consult` query value. Empty values mean "unset".
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "" => None,
            "Video Consult" => Some(ConsultMode::VideoConsult),
            "In Clinic" => Some(ConsultMode::InClinic),
            other => Some(ConsultMode::Unrecognized(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ConsultMode::VideoConsult => "Video Consult",
            ConsultMode::InClinic => "In Clinic",
            ConsultMode::Unrecognized(label) => label,
        }
    }
}

/// Sort key for the doctor listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    FeesAscending,        // Lowest fee first
    ExperienceDescending, // Most years first
}

impl SortKey {
    /// Parse a `sort` query value. Unknown values leave the list unsorted.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "fees" => Some(SortKey::FeesAscending),
            "experience" => Some(SortKey::ExperienceDescending),
            _ => None,
        }
    }

    /// Value used in the `sort` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::FeesAscending => "fees",
            SortKey::ExperienceDescending => "experience",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::FeesAscending => "Fees (Low to High)",
            SortKey::ExperienceDescending => "Experience (High to Low)",
        }
    }
}
