// shared/src/response.rs

//! Response types

use serde::{Deserialize, Serialize};

/// `GET /health` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: u16,
    pub message: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: 200,
            message: "Healthy".to_string(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == 200
    }
}
