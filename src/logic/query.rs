//! Query string encoding
//!
//! Pure functions mapping a `FilterState` to and from the location's query
//! string. Parameters: `search`, `consult`, `sort` (single) and `specialty`
//! (repeatable). Defaults are omitted rather than written empty.

use crate::model::filters::FilterState;
use crate::{ConsultMode, SortKey};

pub const PARAM_SEARCH: &str = "search";
pub const PARAM_CONSULT: &str = "consult";
pub const PARAM_SPECIALTY: &str = "specialty";
pub const PARAM_SORT: &str = "sort";

/// Percent-encode one query component, writing spaces as `+`
fn encode_component(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

/// Decode one query component; invalid UTF-8 is replaced rather than rejected
fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Split a query string (with or without the leading `?`) into decoded pairs
pub fn parse_pairs(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

/// Build the query string for a filter state, without the leading `?`
///
/// # Examples
/// ```
/// use docfinder::logic::query::encode;
/// use docfinder::model::filters::FilterState;
/// use docfinder::ConsultMode;
///
/// let state = FilterState {
///     consult: Some(ConsultMode::InClinic),
///     ..Default::default()
/// };
/// assert_eq!(encode(&state), "consult=In+Clinic");
/// assert_eq!(encode(&FilterState::default()), "");
/// ```
pub fn encode(state: &FilterState) -> String {
    let mut pairs: Vec<(&str, &str)> = Vec::new();

    if !state.search.is_empty() {
        pairs.push((PARAM_SEARCH, &state.search));
    }
    if let Some(consult) = &state.consult {
        pairs.push((PARAM_CONSULT, consult.as_str()));
    }
    if let Some(sort) = &state.sort {
        pairs.push((PARAM_SORT, sort.as_param()));
    }
    for specialty in &state.specialties {
        pairs.push((PARAM_SPECIALTY, specialty));
    }

    pairs
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Derive a filter state entirely from a query string
///
/// Single-valued parameters take their first non-empty occurrence. Unknown
/// parameters are ignored and nothing here fails.
pub fn decode(query: &str) -> FilterState {
    let mut state = FilterState::default();
    let mut seen_search = false;
    let mut seen_consult = false;
    let mut seen_sort = false;

    for (key, value) in parse_pairs(query) {
        if value.is_empty() {
            continue;
        }

        match key.as_str() {
            PARAM_SEARCH if !seen_search => {
                state.search = value;
                seen_search = true;
            }
            PARAM_CONSULT if !seen_consult => {
                state.consult = ConsultMode::from_label(&value);
                seen_consult = true;
            }
            PARAM_SORT if !seen_sort => {
                state.sort = SortKey::from_label(&value);
                seen_sort = true;
            }
            PARAM_SPECIALTY => state.insert_specialty(&value),
            _ => {}
        }
    }

    state
}
