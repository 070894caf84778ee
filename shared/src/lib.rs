// shared/src/lib.rs

//! Shared types for the promotion console
//!
//! Wire models, error bodies and path helpers used by the client,
//! the console and the mock service.

pub mod api;
pub mod datetime;
pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use api::{ApiRevision, PromotionAction};
pub use error::ErrorBody;
pub use models::{Promotion, PromotionDraft};
pub use response::HealthStatus;
pub use serde::{Deserialize, Serialize};
