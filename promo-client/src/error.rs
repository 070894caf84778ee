// promo-client/src/error.rs

//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed (connect, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        /// `message` field of the error body, if the body carried one
        message: Option<String>,
    },

    /// Success status but the body does not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Operation not offered by the configured API revision
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Message supplied by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
