//! Error types for fetching and resolving doctor records

/// The directory endpoint could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("failed to parse doctor list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A successful fetch did not contain the requested identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("doctor {id} not found")]
pub struct NotFoundError {
    pub id: String,
}

/// Outcome of resolving a single doctor for the detail view
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}
