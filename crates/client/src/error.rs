//! Errors returned by the product API client.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (unreachable host, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-2xx status.
    ///
    /// `body` is the error payload: JSON when it parses, the raw text
    /// otherwise, `None` when the response was empty.
    #[error("API error ({status})")]
    Status { status: u16, body: Option<Value> },

    /// A response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// The client could not be set up (bad base URL, TLS backend).
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Coarse classification used for logging and user messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unreachable API or non-2xx status.
    Transport,
    /// Response body was not the expected JSON.
    Parse,
    Config,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) | ApiError::Status { .. } => ErrorKind::Transport,
            ApiError::Parse(_) => ErrorKind::Parse,
            ApiError::Config(_) => ErrorKind::Config,
        }
    }

    /// HTTP status, when the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Error payload returned by the API, if any.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Parse(e.to_string())
        } else if e.is_builder() {
            ApiError::Config(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_and_network_are_transport_errors() {
        let status = ApiError::Status {
            status: 500,
            body: Some(json!({"message": "boom"})),
        };
        assert_eq!(status.kind(), ErrorKind::Transport);
        assert_eq!(status.status(), Some(500));
        assert_eq!(status.payload(), Some(&json!({"message": "boom"})));

        let network = ApiError::Network("connection refused".into());
        assert_eq!(network.kind(), ErrorKind::Transport);
        assert_eq!(network.status(), None);
    }

    #[test]
    fn parse_error_has_own_kind() {
        assert_eq!(ApiError::Parse("eof".into()).kind(), ErrorKind::Parse);
    }
}
