// promo-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-memory calls (requires the "in-process" feature)

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::http::{HttpClient, api_error, handle_body};
use crate::{ClientError, ClientResult};

/// Oneshot HTTP client.
///
/// Calls an axum `Router` directly through Tower's `oneshot`, with no
/// sockets involved. Used to run the console against an in-process
/// promotion service (tests, demos).
///
/// ```ignore
/// let client = OneshotHttpClient::new(promo_api_mock::router(state));
/// let promo: Promotion = client.get("/api/promotions/1").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached (`with_state`)
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn build_request(&self, method: Method, path: &str, body: Body) -> ClientResult<Request<Body>> {
        Request::builder()
            .method(method)
            .uri(path)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    fn build_request_with_body<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let body_bytes = serde_json::to_vec(body)?;
        self.build_request(method, path, Body::from(body_bytes))
    }

    /// Run the request and collect status + body
    async fn call(&self, request: Request<Body>) -> ClientResult<(http::StatusCode, Vec<u8>)> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;
        Ok((status, body_bytes.to_vec()))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let (status, body) = self.call(request).await?;
        handle_body(status, &body)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, Body::empty())?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(Method::PUT, path, body)?;
        self.execute(request).await
    }

    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::PUT, path, Body::empty())?;
        self.execute(request).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = self.build_request(Method::DELETE, path, Body::empty())?;
        let (status, body) = self.call(request).await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }
        Ok(())
    }
}
