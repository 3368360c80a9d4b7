//! Error types for the cinema API client

use thiserror::Error;

/// Errors that can occur when talking to the cinema backend
///
/// The backend reports failure two ways: a non-2xx status with a
/// `message` body, or a 2xx status whose body carries `success: false`.
/// Both surface here so callers handle them through one type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP request failed before any response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be decoded
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Bearer token missing, expired, or rejected
    #[error("Unauthorized - bearer token missing or rejected")]
    Unauthorized,

    /// Server answered 2xx but reported failure in the body
    #[error("Rejected by server: {0}")]
    Rejected(String),

    /// Any other non-success HTTP status
    #[error("Server error (status {status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (status 500): boom");
    }

    #[test]
    fn test_rejected_display() {
        let err = ApiError::Rejected("seat already taken".to_string());
        assert_eq!(err.to_string(), "Rejected by server: seat already taken");
    }
}
