// promo-api-mock/src/error.rs

//! Error responses
//!
//! Every failure renders as `{"status", "error", "message"}`, the body
//! the console reads `message` from.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ErrorBody;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 404
    #[error("{0}")]
    NotFound(String),

    /// 400
    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// 415
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// 500
    #[error("An error occurred : {0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            error!(error = %message, "Request failed");
        }

        let body = ErrorBody::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error"),
            message,
        );
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedMediaType(
                "Content-Type must be application/json".to_string(),
            ),
            other => ApiError::BadRequest(format!(
                "body of request contained bad or no data {}",
                other.body_text()
            )),
        }
    }
}
