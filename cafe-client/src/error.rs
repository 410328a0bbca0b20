//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, DNS, TLS, ...)
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// Request exceeded the client-side deadline and was aborted
    #[error("Request timed out")]
    Timeout,

    /// Non-2xx response; message is the server-provided error text when
    /// present, else derived from the status code
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx response whose body is missing required fields
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client-side validation failure; never reaches the network
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Non-2xx error with the status-derived fallback message
    pub fn status(status: http::StatusCode, body_error: Option<String>) -> Self {
        Self::Status {
            status: status.as_u16(),
            message: body_error.unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
        }
    }

    /// True for errors worth retrying under a retry policy
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout | Self::Status { .. }
        )
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err)
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_server_message() {
        let err = ClientError::status(
            http::StatusCode::BAD_REQUEST,
            Some("Table is closed".to_string()),
        );
        assert_eq!(err.to_string(), "Table is closed");
    }

    #[test]
    fn test_status_falls_back_to_code() {
        let err = ClientError::status(http::StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn test_validation_not_retryable() {
        assert!(!ClientError::Validation("empty cart".to_string()).is_retryable());
        assert!(ClientError::Timeout.is_retryable());
        assert!(
            ClientError::Status {
                status: 500,
                message: "HTTP 500".to_string()
            }
            .is_retryable()
        );
    }
}
