//! API error types for the catalog client.

use thiserror::Error;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested page does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limited by the catalog API.
    #[error("Rate limited: please wait before retrying")]
    RateLimited,

    /// Catalog server error.
    #[error("Catalog server error: {0}")]
    ServerError(String),

    /// Network or HTTP error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid response from the API.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create an error from an HTTP status code.
    pub fn from_status(status: reqwest::StatusCode, context: &str) -> Self {
        match status.as_u16() {
            404 => ApiError::NotFound(context.to_string()),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(format!("HTTP {}: {}", status, context)),
            _ => ApiError::ServerError(format!("Unexpected HTTP {}: {}", status, context)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_error_from_status_404() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, "page 9000");
        match err {
            ApiError::NotFound(msg) => assert_eq!(msg, "page 9000"),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_error_from_status_429() {
        let err = ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, "test");
        assert!(matches!(err, ApiError::RateLimited));
    }

    #[test]
    fn test_error_from_status_500() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "test");
        assert!(matches!(err, ApiError::ServerError(_)));
    }

    #[test]
    fn test_error_from_status_403_is_unexpected() {
        let err = ApiError::from_status(StatusCode::FORBIDDEN, "test");
        match err {
            ApiError::ServerError(msg) => assert!(msg.starts_with("Unexpected HTTP 403")),
            _ => panic!("Expected ServerError"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::RateLimited;
        assert_eq!(err.to_string(), "Rate limited: please wait before retrying");

        let err = ApiError::InvalidResponse("missing pagination".to_string());
        assert_eq!(err.to_string(), "Invalid API response: missing pagination");
    }
}
