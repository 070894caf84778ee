// shared/src/api.rs

//! API revisions and resource paths
//!
//! The promotion service exists in two shapes. `Current` is served under
//! `/api/promotions`; `Legacy` is the earlier `/promotions` revision, kept
//! only for compatibility with old deployments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Health check endpoint (current revision only)
pub const HEALTH_PATH: &str = "/health";

const CURRENT_BASE: &str = "/api/promotions";
const LEGACY_BASE: &str = "/promotions";

/// Which shape of the promotion API to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiRevision {
    #[default]
    Current,
    /// Deprecated: `/promotions` with short field names, no activate/deactivate.
    Legacy,
}

/// State toggle endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionAction {
    Activate,
    Deactivate,
}

impl PromotionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromotionAction::Activate => "activate",
            PromotionAction::Deactivate => "deactivate",
        }
    }
}

impl ApiRevision {
    /// Collection path, e.g. `/api/promotions`
    pub fn collection_path(&self) -> &'static str {
        match self {
            ApiRevision::Current => CURRENT_BASE,
            ApiRevision::Legacy => LEGACY_BASE,
        }
    }

    /// Item path, e.g. `/api/promotions/7`
    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.collection_path(), id)
    }

    /// Activate/deactivate path, e.g. `/api/promotions/activate/7`.
    ///
    /// Returns `None` for the legacy revision, which has no such endpoints.
    pub fn action_path(&self, action: PromotionAction, id: i64) -> Option<String> {
        match self {
            ApiRevision::Current => Some(format!("{}/{}/{}", CURRENT_BASE, action.as_str(), id)),
            ApiRevision::Legacy => None,
        }
    }

    /// Collection path with a query string; no `?` when the query is empty
    pub fn search_path(&self, query: &str) -> String {
        if query.is_empty() {
            self.collection_path().to_string()
        } else {
            format!("{}?{}", self.collection_path(), query)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiRevision::Current => "current",
            ApiRevision::Legacy => "legacy",
        }
    }
}

impl fmt::Display for ApiRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown API revision: {0} (expected 'current' or 'legacy')")]
pub struct UnknownRevision(pub String);

impl FromStr for ApiRevision {
    type Err = UnknownRevision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" | "" => Ok(ApiRevision::Current),
            "legacy" => Ok(ApiRevision::Legacy),
            other => Err(UnknownRevision(other.to_string())),
        }
    }
}
