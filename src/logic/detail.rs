//! Detail lookup
//!
//! The directory has no per-doctor endpoint, so the detail view fetches the
//! whole list and picks the record here.

use crate::api::Doctor;
use crate::error::{FetchError, LookupError, NotFoundError};

/// First doctor whose identifier equals `id`
pub fn get_by_id<'a>(doctors: &'a [Doctor], id: &str) -> Result<&'a Doctor, NotFoundError> {
    doctors
        .iter()
        .find(|doctor| doctor.id == id)
        .ok_or_else(|| NotFoundError { id: id.to_string() })
}

/// Resolve a fetch result for the detail view
///
/// A failed fetch stays a fetch error even when the id would have existed.
pub fn resolve(fetched: Result<Vec<Doctor>, FetchError>, id: &str) -> Result<Doctor, LookupError> {
    let doctors = fetched?;
    let doctor = get_by_id(&doctors, id)?;
    Ok(doctor.clone())
}
