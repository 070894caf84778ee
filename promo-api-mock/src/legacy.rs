// promo-api-mock/src/legacy.rs

//! Legacy `/promotions` routes
//!
//! Same store as the current API, viewed through the short field names.
//! Filters: `name` (exact), `type` (case-insensitive), `active`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use shared::models::{LegacyPromotion, LegacyPromotionDraft, PromotionDraft};
use tracing::info;

use crate::api::not_found;
use crate::error::ApiResult;
use crate::state::AppState;
use crate::validate::validate_draft;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/promotions", get(list).post(create))
        .route("/promotions/{id}", get(get_by_id).put(update).delete(delete))
}

#[derive(Debug, Default, Deserialize)]
pub struct LegacyListParams {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub promotion_type: Option<String>,
    pub active: Option<bool>,
}

async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LegacyListParams>,
) -> Json<Vec<LegacyPromotion>> {
    let promotions = state
        .list()
        .await
        .iter()
        .filter(|p| params.name.as_ref().is_none_or(|n| p.name.as_ref() == Some(n)))
        .filter(|p| {
            params.promotion_type.as_ref().is_none_or(|t| {
                p.promotion_type
                    .as_deref()
                    .is_some_and(|pt| pt.eq_ignore_ascii_case(t))
            })
        })
        .filter(|p| params.active.is_none_or(|a| p.active == a))
        .map(LegacyPromotion::from)
        .collect();
    Json(promotions)
}

async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LegacyPromotionDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<LegacyPromotion>)> {
    let Json(legacy) = payload?;
    let draft = validate_draft(PromotionDraft::from(legacy), true)?;
    let promo = state.insert(draft).await;
    info!(id = promo.id, "Created promotion (legacy)");
    Ok((StatusCode::CREATED, Json(LegacyPromotion::from(&promo))))
}

async fn get_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<LegacyPromotion>> {
    let promo = state.get(id).await.ok_or_else(|| not_found(id))?;
    Ok(Json(LegacyPromotion::from(&promo)))
}

/// Fields the legacy shape cannot express are kept from the stored record
async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<LegacyPromotionDraft>, JsonRejection>,
) -> ApiResult<Json<LegacyPromotion>> {
    let existing = state.get(id).await.ok_or_else(|| not_found(id))?;
    let Json(legacy) = payload?;
    let incoming = validate_draft(PromotionDraft::from(legacy), false)?;
    let merged = PromotionDraft {
        code: existing.code,
        value: existing.value,
        description: existing.description,
        end_date: existing.end_date,
        ..incoming
    };
    let promo = state.replace(id, merged).await.ok_or_else(|| not_found(id))?;
    info!(id, "Updated promotion (legacy)");
    Ok(Json(LegacyPromotion::from(&promo)))
}

async fn delete(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> StatusCode {
    if state.remove(id).await {
        info!(id, "Deleted promotion (legacy)");
    }
    StatusCode::NO_CONTENT
}
