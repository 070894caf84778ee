// shared/src/models/legacy.rs

//! Legacy promotion shape (`/promotions`)
//!
//! Deprecated. Fields: `id, name, type, active, scope, date`. The single
//! `date` maps onto `start_date` of the current record.

use serde::{Deserialize, Serialize};

use super::promotion::{Promotion, PromotionDraft};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyPromotion {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub promotion_type: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyPromotionDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub promotion_type: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl From<LegacyPromotion> for Promotion {
    fn from(legacy: LegacyPromotion) -> Self {
        let draft = PromotionDraft {
            name: legacy.name,
            promotion_type: legacy.promotion_type,
            active: legacy.active,
            scope: legacy.scope,
            start_date: legacy.date,
            ..Default::default()
        };
        draft.into_promotion(legacy.id)
    }
}

impl From<&Promotion> for LegacyPromotion {
    fn from(promo: &Promotion) -> Self {
        Self {
            id: promo.id,
            name: promo.name.clone(),
            promotion_type: promo.promotion_type.clone(),
            active: promo.active,
            scope: promo.scope.clone(),
            date: promo.start_date.clone(),
        }
    }
}

impl From<&PromotionDraft> for LegacyPromotionDraft {
    fn from(draft: &PromotionDraft) -> Self {
        Self {
            name: draft.name.clone(),
            promotion_type: draft.promotion_type.clone(),
            active: draft.active,
            scope: draft.scope.clone(),
            date: draft.start_date.clone(),
        }
    }
}

impl From<LegacyPromotionDraft> for PromotionDraft {
    fn from(legacy: LegacyPromotionDraft) -> Self {
        Self {
            name: legacy.name,
            promotion_type: legacy.promotion_type,
            active: legacy.active,
            scope: legacy.scope,
            start_date: legacy.date,
            ..Default::default()
        }
    }
}
