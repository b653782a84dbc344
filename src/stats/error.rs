//! Stats error types
//!
//! `FetchError` is the only error a chart view ever sees. Transport causes
//! are kept as text so the type is the same on native and WASM clients.

use thiserror::Error;

/// Malformed response contents caught while building rows
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Parallel arrays disagree on length
    #[error("Length mismatch: {field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A trip count below zero
    #[error("Negative count {count} at index {index}")]
    NegativeCount { index: usize, count: i64 },
}

/// Failure to obtain usable statistics from the API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, DNS, TLS or other transport failure
    #[error("Network error requesting {url}: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON shape
    #[error("Malformed response from {url}: {message}")]
    Decode { url: String, message: String },

    /// The body decoded but failed validation
    #[error("Invalid response: {0}")]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_to_fetch_error() {
        let err: FetchError = ValidationError::NegativeCount { index: 2, count: -1 }.into();
        assert_eq!(err.to_string(), "Invalid response: Negative count -1 at index 2");
    }

    #[test]
    fn test_status_message() {
        let err = FetchError::Status {
            url: "/api/hour-range-stats".to_string(),
            status: 500,
        };
        assert_eq!(err.to_string(), "HTTP 500 from /api/hour-range-stats");
    }
}
