// promo-api-mock/src/lib.rs

//! In-memory promotion service
//!
//! Serves the current (`/api/promotions`) and legacy (`/promotions`)
//! promotion APIs from a process-local store. Every request is recorded
//! so callers can assert on what actually reached the service.

pub mod api;
pub mod error;
pub mod legacy;
pub mod state;
pub mod validate;

use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
};

pub use error::{ApiError, ApiResult};
pub use state::{AppState, RecordedRequest};

/// Full application router with the request log attached
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(api::routes())
        .merge(legacy::routes())
        .layer(middleware::from_fn_with_state(state.clone(), record_request))
        .with_state(state)
}

async fn record_request(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    state
        .record(request.method().as_str(), &request.uri().to_string())
        .await;
    next.run(request).await
}
