// promo-client/src/client/mod.rs

//! Transport layer.
//!
//! [`HttpClient`] abstracts how requests reach the promotion service:
//! over the network with reqwest, or in-process against an axum `Router`
//! (feature `in-process`).

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

// Re-export main types
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
