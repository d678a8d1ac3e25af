//! Detail Model
//!
//! One doctor's page: loading, not found, network error, or ready.

use crate::api::Doctor;
use crate::error::{FetchError, LookupError};
use crate::logic;
use crate::logic::errors::ErrorType;

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch doctor data";
pub const NOT_FOUND_MESSAGE: &str = "Doctor not found";

#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Loading,
    /// The fetch succeeded but had no doctor with this id
    NotFound,
    /// The fetch itself failed
    NetworkError {
        error_type: ErrorType,
        message: String,
    },
    Ready(Doctor),
}

#[derive(Clone, Debug)]
pub struct DetailModel {
    pub doctor_id: String,
    pub state: DetailState,
}

impl DetailModel {
    pub fn new(doctor_id: String) -> Self {
        Self {
            doctor_id,
            state: DetailState::Loading,
        }
    }

    /// Settle the page from a fetch result
    pub fn resolve(&mut self, fetched: Result<Vec<Doctor>, FetchError>) {
        self.state = match logic::detail::resolve(fetched, &self.doctor_id) {
            Ok(doctor) => DetailState::Ready(doctor),
            Err(LookupError::NotFound(_)) => DetailState::NotFound,
            Err(LookupError::Fetch(error)) => DetailState::NetworkError {
                error_type: logic::errors::classify_error(&error),
                message: logic::errors::format_error_message(&error),
            },
        };
    }

    pub fn doctor(&self) -> Option<&Doctor> {
        match &self.state {
            DetailState::Ready(doctor) => Some(doctor),
            _ => None,
        }
    }

    /// User-facing message for the error states
    pub fn message(&self) -> Option<&'static str> {
        match self.state {
            DetailState::NotFound => Some(NOT_FOUND_MESSAGE),
            DetailState::NetworkError { .. } => Some(FETCH_ERROR_MESSAGE),
            DetailState::Loading | DetailState::Ready(_) => None,
        }
    }
}
