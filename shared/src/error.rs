// shared/src/error.rs

//! Error body returned by the promotion service
//!
//! ```json
//! {
//!     "status": 404,
//!     "error": "Not Found",
//!     "message": "Promotion with id: 7 not found"
//! }
//! ```
//!
//! Every field is optional when decoding: the console only relies on
//! `message`, and falls back to its own text when it is missing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(status: u16, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            error: Some(error.into()),
            message: Some(message.into()),
        }
    }

    /// Decode from a raw response body; `None` if it is not a JSON object
    pub fn from_slice(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    /// Non-empty message, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}
