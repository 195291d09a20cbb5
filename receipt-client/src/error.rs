//! Client error types

use std::time::Duration;

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Template API answered with a non-success status
    #[error("Failed to fetch receipt template: {status} {text}")]
    Fetch { status: u16, text: String },

    /// Print bridge unreachable or not healthy
    #[error("Print service unavailable: {reason}")]
    ServiceUnavailable { reason: String, timed_out: bool },

    /// Sale receipt requested while no template is active
    #[error("No active receipt template")]
    NoTemplate,

    /// Request exceeded its time budget
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Print bridge rejected the job; carries the bridge's own message
    #[error("{0}")]
    PrintService(String),

    /// Connection could not be established
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether the failure was caused by a timeout, directly or through a health check
    pub fn is_timeout(&self) -> bool {
        match self {
            ClientError::Timeout(_) => true,
            ClientError::ServiceUnavailable { timed_out, .. } => *timed_out,
            _ => false,
        }
    }
}

// reqwest clients are built without their own timeout; budgets are enforced by the caller
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            ClientError::InvalidRequest(err.to_string())
        } else {
            ClientError::Connection(err.to_string())
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_service_displays_bridge_message_only() {
        let err = ClientError::PrintService("printer jammed".into());
        assert_eq!(err.to_string(), "printer jammed");
    }

    #[test]
    fn test_timeout_classification() {
        assert!(ClientError::Timeout(Duration::from_secs(5)).is_timeout());
        assert!(
            ClientError::ServiceUnavailable {
                reason: "health check timed out".into(),
                timed_out: true,
            }
            .is_timeout()
        );
        assert!(
            !ClientError::ServiceUnavailable {
                reason: "HTTP 503 Service Unavailable".into(),
                timed_out: false,
            }
            .is_timeout()
        );
        assert!(!ClientError::NoTemplate.is_timeout());
    }

    #[test]
    fn test_timeout_message() {
        let err = ClientError::Timeout(Duration::from_secs(10));
        assert_eq!(err.to_string(), "Request timed out after 10s");
    }
}
