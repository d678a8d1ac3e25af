use std::error::Error;

use crate::error::FetchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    HttpStatus,   // Any other non-success status
    NetworkError, // DNS, routing, etc.
    InvalidData,  // Body was not a doctor list
    Other,
}

/// Classify a fetch failure by variant and error text
pub fn classify_error(error: &FetchError) -> ErrorType {
    match error {
        FetchError::Status { status, .. } => {
            return match status {
                404 => ErrorType::NotFound,
                500..=599 => ErrorType::ServerError,
                _ => ErrorType::HttpStatus,
            };
        }
        FetchError::Decode(_) => return ErrorType::InvalidData,
        FetchError::Request { source, .. } | FetchError::Body(source) => {
            if source.is_timeout() {
                return ErrorType::Timeout;
            }
            if source.is_decode() {
                return ErrorType::InvalidData;
            }
        }
    }

    let error_msg = format_error_message(error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns")
        || error_msg.contains("network")
        || error_msg.contains("error trying to connect")
    {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for the status bar and log - show raw error details
pub fn format_error_message(error: &FetchError) -> String {
    // Walk the chain to the deepest (root cause) error
    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}
