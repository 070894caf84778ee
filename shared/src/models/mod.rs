// shared/src/models/mod.rs

//! Data models
//!
//! Shared between the promotion service and the console (via API).
//! `promotion` is the current wire shape; `legacy` the deprecated one.

pub mod legacy;
pub mod promotion;

// Re-exports
pub use legacy::*;
pub use promotion::*;
