// promo-client/src/client/http.rs
// HTTP client - network transport

use async_trait::async_trait;
use http::StatusCode;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ErrorBody;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client trait.
///
/// Paths are absolute (`/api/promotions/7`). A non-success status becomes
/// [`ClientError::Api`] carrying the body's `message`, if any.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + std::marker::Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + std::marker::Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    /// DELETE; any success status counts, the body (often empty) is ignored
    async fn delete(&self, path: &str) -> ClientResult<()>;
}

/// Build the error for a non-success response
pub(crate) fn api_error(status: StatusCode, body: &[u8]) -> ClientError {
    let message = ErrorBody::from_slice(body).and_then(|b| b.message().map(str::to_string));
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Classify a response: error body on failure, JSON payload on success
pub(crate) fn handle_body<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> ClientResult<T> {
    if !status.is_success() {
        return Err(api_error(status, body));
    }
    serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        handle_body(status, &body)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        self.execute(self.client.get(self.url(path))).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + std::marker::Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        self.execute(self.client.post(self.url(path)).json(body)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + std::marker::Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "PUT");
        self.execute(self.client.put(self.url(path)).json(body)).await
    }

    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "PUT");
        let req = self
            .client
            .put(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        self.execute(req).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        tracing::debug!(path, "DELETE");
        let response = self.client.delete(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await?;
            return Err(api_error(status, &body));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_client_trims_base_url() {
        let config = ClientConfig::new("http://localhost:8080/");
        let client = NetworkHttpClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/api/promotions"), "http://localhost:8080/api/promotions");
    }

    #[test]
    fn test_handle_body_error_with_message() {
        let err = handle_body::<serde_json::Value>(
            StatusCode::NOT_FOUND,
            br#"{"status":404,"error":"Not Found","message":"Promotion with id: 3 not found"}"#,
        )
        .unwrap_err();
        assert_eq!(err.server_message(), Some("Promotion with id: 3 not found"));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_handle_body_error_without_message() {
        let err = handle_body::<serde_json::Value>(StatusCode::INTERNAL_SERVER_ERROR, b"oops")
            .unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 500, message: None }));
    }

    #[test]
    fn test_handle_body_invalid_json() {
        let err = handle_body::<serde_json::Value>(StatusCode::OK, b"not json").unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
