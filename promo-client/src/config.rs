// promo-client/src/config.rs

//! Client configuration

use shared::ApiRevision;

pub const ENV_API_URL: &str = "PROMO_API_URL";
pub const ENV_API_REVISION: &str = "PROMO_API_REVISION";
pub const ENV_API_TIMEOUT: &str = "PROMO_API_TIMEOUT";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the promotion service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Which API shape the server speaks
    pub revision: ApiRevision,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration for the current API revision
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            revision: ApiRevision::Current,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read `PROMO_API_URL`, `PROMO_API_REVISION` and `PROMO_API_TIMEOUT`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(ENV_API_URL)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let revision = match lookup(ENV_API_REVISION) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, ApiRevision::default());
                ApiRevision::default()
            }),
            None => ApiRevision::default(),
        };

        let timeout = lookup(ENV_API_TIMEOUT)
            .and_then(|t| t.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            revision,
            timeout,
        }
    }

    /// Set the API revision
    pub fn with_revision(mut self, revision: ApiRevision) -> Self {
        self.revision = revision;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
