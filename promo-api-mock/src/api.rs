// promo-api-mock/src/api.rs

//! Promotion API handlers (current revision)

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, put},
};
use serde::Deserialize;
use shared::HealthStatus;
use shared::datetime::parse_datetime;
use shared::models::{Promotion, PromotionDraft};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::validate::{parse_query_datetime, validate_draft};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/api/promotions", get(list).post(create))
        .route(
            "/api/promotions/{id}",
            get(get_by_id).put(update).delete(delete),
        )
        .route("/api/promotions/activate/{id}", put(activate))
        .route("/api/promotions/deactivate/{id}", put(deactivate))
}

/// Search filters; multi-valued ones are comma separated
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub datetime: Option<String>,
    pub promotion_type: Option<String>,
    pub promotion_scope: Option<String>,
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

/// GET /api/promotions
async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Promotion>>> {
    let at = params
        .datetime
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(parse_query_datetime)
        .transpose()?;
    let types = split_list(params.promotion_type.as_deref());
    let scopes = split_list(params.promotion_scope.as_deref());

    let promotions = state
        .list()
        .await
        .into_iter()
        .filter(|p| at.is_none_or(|at| active_at(p, at)))
        .filter(|p| matches_any(&types, p.promotion_type.as_deref()))
        .filter(|p| matches_any(&scopes, p.scope.as_deref()))
        .collect();
    Ok(Json(promotions))
}

/// POST /api/promotions
async fn create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PromotionDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Promotion>)> {
    let Json(draft) = payload?;
    let draft = validate_draft(draft, true)?;
    let promo = state.insert(draft).await;
    info!(id = promo.id, name = ?promo.name, "Created promotion");
    Ok((StatusCode::CREATED, Json(promo)))
}

/// GET /api/promotions/{id}
async fn get_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Promotion>> {
    state.get(id).await.map(Json).ok_or_else(|| not_found(id))
}

/// PUT /api/promotions/{id}
async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<PromotionDraft>, JsonRejection>,
) -> ApiResult<Json<Promotion>> {
    if state.get(id).await.is_none() {
        return Err(not_found(id));
    }
    let Json(draft) = payload?;
    let draft = validate_draft(draft, false)?;
    let promo = state.replace(id, draft).await.ok_or_else(|| not_found(id))?;
    info!(id, "Updated promotion");
    Ok(Json(promo))
}

/// DELETE /api/promotions/{id}; 204 whether or not the record existed
async fn delete(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> StatusCode {
    if state.remove(id).await {
        info!(id, "Deleted promotion");
    }
    StatusCode::NO_CONTENT
}

/// PUT /api/promotions/activate/{id}
async fn activate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Promotion>> {
    set_active(&state, id, true).await
}

/// PUT /api/promotions/deactivate/{id}
async fn deactivate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Promotion>> {
    set_active(&state, id, false).await
}

async fn set_active(state: &AppState, id: i64, active: bool) -> ApiResult<Json<Promotion>> {
    let promo = state
        .set_active(id, active)
        .await
        .ok_or_else(|| not_found(id))?;
    info!(id, active, "Toggled promotion");
    Ok(Json(promo))
}

pub(crate) fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Promotion with id: {} not found", id))
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|r| {
        r.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Empty filter matches everything
fn matches_any(wanted: &[String], value: Option<&str>) -> bool {
    wanted.is_empty() || value.is_some_and(|v| wanted.iter().any(|w| w.eq_ignore_ascii_case(v)))
}

/// start_date <= at <= end_date; records missing either bound never match
fn active_at(promo: &Promotion, at: chrono::NaiveDateTime) -> bool {
    let start = promo.start_date.as_deref().and_then(parse_datetime);
    let end = promo.end_date.as_deref().and_then(parse_datetime);
    matches!((start, end), (Some(s), Some(e)) if s <= at && at <= e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(Some("a, b,,c")), vec!["a", "b", "c"]);
        assert!(split_list(Some("")).is_empty());
        assert!(split_list(None).is_empty());
    }

    #[test]
    fn test_matches_any_is_case_insensitive() {
        let wanted = vec!["product_id".to_string(), "entire_store".to_string()];
        assert!(matches_any(&wanted, Some("ENTIRE_STORE")));
        assert!(!matches_any(&wanted, Some("PRODUCT_CATEGORY")));
        assert!(!matches_any(&wanted, None));
        assert!(matches_any(&[], None));
    }
}
