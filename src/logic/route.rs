//! Route parsing
//!
//! A location is `<path>[?<query>]`. `/` is the listing (its query seeds the
//! filters) and `/doctor/<id>` is a doctor's detail page.

use crate::logic::query;
use crate::model::filters::FilterState;

pub const LISTING_PATH: &str = "/";
const DETAIL_PREFIX: &str = "/doctor/";

/// A resolved location
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Listing(FilterState),
    Detail { doctor_id: String },
}

/// Resolve a location; unknown paths fall back to the plain listing
///
/// # Examples
/// ```
/// use docfinder::logic::route::{parse_location, Route};
///
/// assert_eq!(
///     parse_location("/doctor/42"),
///     Route::Detail { doctor_id: "42".to_string() }
/// );
/// assert!(matches!(parse_location("/?sort=fees"), Route::Listing(_)));
/// ```
pub fn parse_location(location: &str) -> Route {
    let (path, query_string) = match location.split_once('?') {
        Some((path, q)) => (path, q),
        None => (location, ""),
    };

    if let Some(raw_id) = path.strip_prefix(DETAIL_PREFIX) {
        let raw_id = raw_id.trim_end_matches('/');
        if !raw_id.is_empty() && !raw_id.contains('/') {
            let bytes = urlencoding::decode_binary(raw_id.as_bytes());
            return Route::Detail {
                doctor_id: String::from_utf8_lossy(&bytes).into_owned(),
            };
        }
    }

    if path.is_empty() || path == LISTING_PATH {
        Route::Listing(query::decode(query_string))
    } else {
        tracing::debug!(path, "unknown path, showing listing");
        Route::Listing(FilterState::default())
    }
}

/// Location of the listing for a filter state
pub fn listing_location(state: &FilterState) -> String {
    let encoded = query::encode(state);
    if encoded.is_empty() {
        LISTING_PATH.to_string()
    } else {
        format!("{}?{}", LISTING_PATH, encoded)
    }
}

/// Location of a doctor's detail page
pub fn detail_location(doctor_id: &str) -> String {
    format!("{}{}", DETAIL_PREFIX, urlencoding::encode(doctor_id))
}

/// Canonical location of a resolved route
pub fn route_location(route: &Route) -> String {
    match route {
        Route::Listing(state) => listing_location(state),
        Route::Detail { doctor_id } => detail_location(doctor_id),
    }
}
