// promo-api-mock/src/state.rs

//! In-memory promotion store

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use shared::datetime::to_iso;
use shared::models::{Promotion, PromotionDraft};
use tokio::sync::{Mutex, RwLock};

/// A request as seen by the service, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub uri: String,
}

#[derive(Debug, Default)]
struct Store {
    promotions: BTreeMap<i64, Promotion>,
    next_id: i64,
}

#[derive(Debug, Default)]
pub struct AppState {
    store: RwLock<Store>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state wrapped for sharing with the router
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Insert a validated draft, assigning the next id
    pub async fn insert(&self, draft: PromotionDraft) -> Promotion {
        let mut store = self.store.write().await;
        store.next_id += 1;
        let id = store.next_id;

        let mut promo = draft.into_promotion(id);
        let now = to_iso(&Utc::now().naive_utc());
        promo.created_when = Some(now.clone());
        promo.modified_when = Some(now);

        store.promotions.insert(id, promo.clone());
        promo
    }

    pub async fn get(&self, id: i64) -> Option<Promotion> {
        self.store.read().await.promotions.get(&id).cloned()
    }

    /// All promotions ordered by id
    pub async fn list(&self) -> Vec<Promotion> {
        self.store.read().await.promotions.values().cloned().collect()
    }

    /// Overwrite every editable field; `None` if the id is unknown
    pub async fn replace(&self, id: i64, draft: PromotionDraft) -> Option<Promotion> {
        let mut store = self.store.write().await;
        let existing = store.promotions.get_mut(&id)?;

        let mut updated = draft.into_promotion(id);
        updated.created_by = existing.created_by.take();
        updated.created_when = existing.created_when.take();
        updated.modified_when = Some(to_iso(&Utc::now().naive_utc()));

        *existing = updated.clone();
        Some(updated)
    }

    pub async fn set_active(&self, id: i64, active: bool) -> Option<Promotion> {
        let mut store = self.store.write().await;
        let existing = store.promotions.get_mut(&id)?;
        existing.active = active;
        existing.modified_when = Some(to_iso(&Utc::now().naive_utc()));
        Some(existing.clone())
    }

    /// Returns whether a record was removed
    pub async fn remove(&self, id: i64) -> bool {
        self.store.write().await.promotions.remove(&id).is_some()
    }

    pub async fn record(&self, method: &str, uri: &str) {
        self.requests.lock().await.push(RecordedRequest {
            method: method.to_string(),
            uri: uri.to_string(),
        });
    }

    /// Every request received so far
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> PromotionDraft {
        PromotionDraft {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let state = AppState::new();
        let a = state.insert(draft("A")).await;
        let b = state.insert(draft("B")).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(a.created_when.is_some());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_remove() {
        let state = AppState::new();
        let a = state.insert(draft("A")).await;
        assert!(state.remove(a.id).await);
        assert!(!state.remove(a.id).await);
        let b = state.insert(draft("B")).await;
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_replace_keeps_creation_audit() {
        let state = AppState::new();
        let a = state.insert(draft("A")).await;
        let updated = state.replace(a.id, draft("A2")).await.unwrap();
        assert_eq!(updated.name.as_deref(), Some("A2"));
        assert_eq!(updated.created_when, a.created_when);
        assert!(state.replace(99, draft("X")).await.is_none());
    }

    #[tokio::test]
    async fn test_set_active() {
        let state = AppState::new();
        let a = state.insert(draft("A")).await;
        assert!(!a.active);
        assert!(state.set_active(a.id, true).await.unwrap().active);
        assert!(state.get(a.id).await.unwrap().active);
    }
}
