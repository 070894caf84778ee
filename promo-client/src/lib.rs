// promo-client/src/lib.rs

//! Promo Client - HTTP client for the promotion service
//!
//! Provides typed calls to the promotion API over the network, or
//! in-process against an axum `Router` (feature `in-process`).

pub mod api;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;

pub use api::PromotionApi;
pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

// Re-export shared types for convenience
pub use shared::models::{Promotion, PromotionDraft};
pub use shared::{ApiRevision, HealthStatus};
