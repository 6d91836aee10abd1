//! Indexing client error types.
//!
//! This module defines the errors surfaced by calls to the indexing service.

use thiserror::Error;

/// Errors that can occur while calling the indexing service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IndexingClientError {
    /// The remote call failed: either the transport failed (no status) or
    /// the service answered with a non-2xx status.
    #[error("Remote call error{}: {message}", .status.map(|s| format!(" (status {})", s)).unwrap_or_default())]
    RemoteCallError {
        status: Option<u16>,
        message: String,
    },

    /// The response body was not JSON of the expected shape.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// The client configuration is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IndexingClientError {
    /// Create a transport-level remote call error.
    pub fn remote_call(msg: impl Into<String>) -> Self {
        Self::RemoteCallError {
            status: None,
            message: msg.into(),
        }
    }

    /// Create a remote call error for a non-2xx response.
    pub fn remote_status(status: u16, body: impl Into<String>) -> Self {
        Self::RemoteCallError {
            status: Some(status),
            message: body.into(),
        }
    }

    /// Create a deserialization error.
    pub fn deserialization(msg: impl Into<String>) -> Self {
        Self::DeserializationError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// HTTP status of the failed response, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteCallError { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_remote_call(&self) -> bool {
        matches!(self, Self::RemoteCallError { .. })
    }

    pub fn is_deserialization(&self) -> bool {
        matches!(self, Self::DeserializationError(_))
    }
}

impl From<serde_json::Error> for IndexingClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::DeserializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_status_display_includes_status() {
        let err = IndexingClientError::remote_status(503, "unavailable");
        assert_eq!(
            err.to_string(),
            "Remote call error (status 503): unavailable"
        );
        assert_eq!(err.status(), Some(503));
        assert!(err.is_remote_call());
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = IndexingClientError::remote_call("connection refused");
        assert_eq!(err.to_string(), "Remote call error: connection refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_serde_error_maps_to_deserialization() {
        let parse_err = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
        let err: IndexingClientError = parse_err.into();

        assert!(err.is_deserialization());
        assert!(!err.is_remote_call());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_config_error_message() {
        let err = IndexingClientError::config("base URL must not be empty");
        assert_eq!(
            err.to_string(),
            "Configuration error: base URL must not be empty"
        );
    }
}
