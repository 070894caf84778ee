// shared/src/models/promotion.rs

//! Promotion Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Promotion types known to the service (matched case-insensitively)
pub const PROMOTION_TYPES: [&str; 2] = ["PERCENTAGE", "ABSOLUTE"];

/// Promotion scopes known to the service (matched case-insensitively)
pub const PROMOTION_SCOPES: [&str; 3] = ["PRODUCT_ID", "PRODUCT_CATEGORY", "ENTIRE_STORE"];

/// Promotion record as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    #[serde(rename = "promotion_id")]
    pub id: i64,
    #[serde(rename = "promotion_name", default)]
    pub name: Option<String>,
    #[serde(rename = "promotion_code", default)]
    pub code: Option<String>,
    /// Discount magnitude (percentage: 30 = 30%, absolute: 5.00).
    ///
    /// Travels as a JSON number through `f64`, the service's column type,
    /// so magnitudes past ~15 significant digits come back rounded.
    #[serde(
        rename = "promotion_value",
        default,
        with = "rust_decimal::serde::float_option"
    )]
    pub value: Option<Decimal>,
    #[serde(default)]
    pub promotion_type: Option<String>,
    #[serde(rename = "promotion_description", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "promotion_scope", default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_when: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_when: Option<String>,
}

/// Create/update payload. Carries no id; `active` is always serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromotionDraft {
    #[serde(rename = "promotion_name", default)]
    pub name: Option<String>,
    #[serde(rename = "promotion_code", default)]
    pub code: Option<String>,
    /// Serialized as an `f64`; see [`Promotion::value`]
    #[serde(
        rename = "promotion_value",
        default,
        with = "rust_decimal::serde::float_option"
    )]
    pub value: Option<Decimal>,
    #[serde(default)]
    pub promotion_type: Option<String>,
    #[serde(rename = "promotion_description", default)]
    pub description: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "promotion_scope", default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl Promotion {
    /// The editable part of this record
    pub fn to_draft(&self) -> PromotionDraft {
        PromotionDraft {
            name: self.name.clone(),
            code: self.code.clone(),
            value: self.value,
            promotion_type: self.promotion_type.clone(),
            description: self.description.clone(),
            active: self.active,
            scope: self.scope.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

impl PromotionDraft {
    /// Attach a server-assigned id
    pub fn into_promotion(self, id: i64) -> Promotion {
        Promotion {
            id,
            name: self.name,
            code: self.code,
            value: self.value,
            promotion_type: self.promotion_type,
            description: self.description,
            active: self.active,
            scope: self.scope,
            start_date: self.start_date,
            end_date: self.end_date,
            created_by: None,
            modified_by: None,
            created_when: None,
            modified_when: None,
        }
    }
}

/// Canonical spelling of `value` in `known`, matched case-insensitively
pub fn canonical_value(known: &[&'static str], value: &str) -> Option<&'static str> {
    let value = value.trim();
    known.iter().copied().find(|k| k.eq_ignore_ascii_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_decode_full_record() {
        let value = json!({
            "promotion_id": 7,
            "promotion_name": "SPRING10",
            "promotion_code": "SPR10",
            "promotion_value": 10.5,
            "promotion_type": "PERCENTAGE",
            "promotion_description": "Spring sale",
            "active": true,
            "promotion_scope": "ENTIRE_STORE",
            "start_date": "2024-03-01T00:00:00",
            "end_date": "2024-03-31T00:00:00",
            "created_by": "9b2f0c3e-0a4d-4d8e-9f11-5f6a2b8c7d10",
            "created_when": "2024-02-20T09:00:00"
        });
        let promo: Promotion = serde_json::from_value(value).unwrap();
        assert_eq!(promo.id, 7);
        assert_eq!(promo.name.as_deref(), Some("SPRING10"));
        assert_eq!(promo.value, Some(Decimal::from_str("10.5").unwrap()));
        assert!(promo.active);
        assert_eq!(promo.scope.as_deref(), Some("ENTIRE_STORE"));
        assert!(promo.modified_by.is_none());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let promo: Promotion = serde_json::from_value(json!({"promotion_id": 1})).unwrap();
        assert_eq!(promo.id, 1);
        assert!(!promo.active);
        assert!(promo.name.is_none());
        assert!(promo.value.is_none());
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        assert!(serde_json::from_value::<Promotion>(json!({"promotion_name": "x"})).is_err());
        assert!(serde_json::from_value::<Promotion>(json!({"promotion_id": "seven"})).is_err());
        assert!(
            serde_json::from_value::<Promotion>(json!({"promotion_id": 1, "active": "yes"}))
                .is_err()
        );
    }

    #[test]
    fn test_draft_always_serializes_active() {
        let draft = PromotionDraft::default();
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["active"], json!(false));
        assert_eq!(value["promotion_name"], json!(null));
        assert!(value.get("promotion_id").is_none());
    }

    #[test]
    fn test_draft_value_is_a_json_number() {
        let draft = PromotionDraft {
            value: Some(Decimal::from_str("15").unwrap()),
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["promotion_value"].as_f64(), Some(15.0));
    }

    #[test]
    fn test_value_precision_is_bounded_by_f64() {
        let exact = Decimal::from_str("5.25").unwrap();
        let huge = Decimal::from_str("12345678901234567890.5").unwrap();
        let back = |v: Decimal| {
            let draft = PromotionDraft { value: Some(v), ..Default::default() };
            let json = serde_json::to_value(&draft).unwrap();
            serde_json::from_value::<PromotionDraft>(json).unwrap().value
        };
        assert_eq!(back(exact), Some(exact));
        assert_ne!(back(huge), Some(huge));
    }

    #[test]
    fn test_canonical_value() {
        assert_eq!(canonical_value(&PROMOTION_TYPES, "percentage"), Some("PERCENTAGE"));
        assert_eq!(canonical_value(&PROMOTION_SCOPES, " entire_store "), Some("ENTIRE_STORE"));
        assert_eq!(canonical_value(&PROMOTION_SCOPES, "site"), None);
    }
}
