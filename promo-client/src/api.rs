// promo-client/src/api.rs

//! Promotion API
//!
//! One method per operation. Every call is independent: nothing is queued,
//! deduplicated or cancelled, and each returns a typed result.
//!
//! | Operation  | Method | Path (current)                      |
//! |------------|--------|-------------------------------------|
//! | create     | POST   | `/api/promotions`                   |
//! | retrieve   | GET    | `/api/promotions/{id}`              |
//! | update     | PUT    | `/api/promotions/{id}`              |
//! | delete     | DELETE | `/api/promotions/{id}`              |
//! | activate   | PUT    | `/api/promotions/activate/{id}`     |
//! | deactivate | PUT    | `/api/promotions/deactivate/{id}`   |
//! | search     | GET    | `/api/promotions?{query}`           |

use serde_json::Value;
use shared::api::HEALTH_PATH;
use shared::models::{Promotion, PromotionDraft};
use shared::{ApiRevision, HealthStatus, PromotionAction};

use crate::client::{HttpClient, NetworkHttpClient};
use crate::codec::{decode_record, decode_records, encode_draft};
use crate::{ClientConfig, ClientError, ClientResult};

/// Typed access to the promotion service over any [`HttpClient`]
#[derive(Debug, Clone)]
pub struct PromotionApi<C> {
    http: C,
    revision: ApiRevision,
}

impl PromotionApi<NetworkHttpClient> {
    /// Network client built from configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(NetworkHttpClient::new(config)?, config.revision))
    }
}

impl<C: HttpClient> PromotionApi<C> {
    pub fn new(http: C, revision: ApiRevision) -> Self {
        Self { http, revision }
    }

    pub fn revision(&self) -> ApiRevision {
        self.revision
    }

    /// POST the full draft; returns the record with its assigned id
    pub async fn create(&self, draft: &PromotionDraft) -> ClientResult<Promotion> {
        let body = encode_draft(self.revision, draft)?;
        let path = self.revision.collection_path();
        let result = self.fetch_record(self.http.post(path, &body).await);
        log_outcome("create", path, &result);
        result
    }

    pub async fn retrieve(&self, id: i64) -> ClientResult<Promotion> {
        let path = self.revision.item_path(id);
        let result = self.fetch_record(self.http.get(&path).await);
        log_outcome("retrieve", &path, &result);
        result
    }

    /// PUT the full draft (the id travels in the path only)
    pub async fn update(&self, id: i64, draft: &PromotionDraft) -> ClientResult<Promotion> {
        let body = encode_draft(self.revision, draft)?;
        let path = self.revision.item_path(id);
        let result = self.fetch_record(self.http.put(&path, &body).await);
        log_outcome("update", &path, &result);
        result
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let path = self.revision.item_path(id);
        let result = self.http.delete(&path).await;
        log_outcome("delete", &path, &result);
        result
    }

    pub async fn activate(&self, id: i64) -> ClientResult<Promotion> {
        self.toggle(PromotionAction::Activate, id).await
    }

    pub async fn deactivate(&self, id: i64) -> ClientResult<Promotion> {
        self.toggle(PromotionAction::Deactivate, id).await
    }

    /// GET the collection filtered by an already-built query string
    pub async fn search(&self, query: &str) -> ClientResult<Vec<Promotion>> {
        let path = self.revision.search_path(query);
        let result = self
            .http
            .get::<Value>(&path)
            .await
            .and_then(|value| decode_records(self.revision, value));
        log_outcome("search", &path, &result);
        result
    }

    /// GET /health
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        if self.revision == ApiRevision::Legacy {
            return Err(ClientError::Unsupported(
                "health check is not available on the legacy API".into(),
            ));
        }
        let result = self.http.get::<HealthStatus>(HEALTH_PATH).await;
        log_outcome("health", HEALTH_PATH, &result);
        result
    }

    async fn toggle(&self, action: PromotionAction, id: i64) -> ClientResult<Promotion> {
        let Some(path) = self.revision.action_path(action, id) else {
            tracing::warn!(action = action.as_str(), revision = %self.revision, "Action not supported");
            return Err(ClientError::Unsupported(format!(
                "{} is not available on the {} API",
                action.as_str(),
                self.revision
            )));
        };
        let result = self.fetch_record(self.http.put_empty(&path).await);
        log_outcome(action.as_str(), &path, &result);
        result
    }

    fn fetch_record(&self, response: ClientResult<Value>) -> ClientResult<Promotion> {
        response.and_then(|value| decode_record(self.revision, value))
    }
}

fn log_outcome<T>(operation: &str, path: &str, result: &ClientResult<T>) {
    match result {
        Ok(_) => tracing::info!(operation, path, "Promotion request succeeded"),
        Err(e) => tracing::warn!(operation, path, error = %e, "Promotion request failed"),
    }
}
