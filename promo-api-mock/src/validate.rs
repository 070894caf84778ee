// promo-api-mock/src/validate.rs

//! Payload validation
//!
//! Categorical values are matched case-insensitively and stored in their
//! canonical upper-case form; dates must use one of the service formats
//! and are stored as ISO-8601.

use shared::datetime::{parse_server_datetime, to_iso};
use shared::models::{PROMOTION_SCOPES, PROMOTION_TYPES, PromotionDraft, canonical_value};

use crate::error::{ApiError, ApiResult};

pub fn validate_draft(mut draft: PromotionDraft, require_name: bool) -> ApiResult<PromotionDraft> {
    if require_name && draft.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
        return Err(ApiError::BadRequest(
            "Invalid promotion: missing promotion_name".to_string(),
        ));
    }

    draft.promotion_type = canonical(draft.promotion_type, &PROMOTION_TYPES, "PromotionType")?;
    draft.scope = canonical(draft.scope, &PROMOTION_SCOPES, "PromotionScope")?;
    draft.start_date = iso_date(draft.start_date)?;
    draft.end_date = iso_date(draft.end_date)?;
    Ok(draft)
}

/// Parse a `datetime` query parameter
pub fn parse_query_datetime(raw: &str) -> ApiResult<chrono::NaiveDateTime> {
    parse_server_datetime(raw).ok_or_else(|| {
        ApiError::BadRequest(format!(
            "Invalid date format: {} does not conform to any valid datetime format",
            raw
        ))
    })
}

fn canonical(
    value: Option<String>,
    known: &[&'static str],
    kind: &str,
) -> ApiResult<Option<String>> {
    match value {
        None => Ok(None),
        Some(v) => canonical_value(known, &v)
            .map(|k| Some(k.to_string()))
            .ok_or_else(|| ApiError::BadRequest(format!("Error: '{}' is not a valid {}", v, kind))),
    }
}

fn iso_date(value: Option<String>) -> ApiResult<Option<String>> {
    value
        .map(|raw| parse_query_datetime(&raw).map(|dt| to_iso(&dt)))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PromotionDraft {
        PromotionDraft {
            name: Some("SPRING10".into()),
            promotion_type: Some("percentage".into()),
            scope: Some("entire_store".into()),
            start_date: Some("2024-03-01".into()),
            end_date: Some("2024-03-31 23:59".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_canonicalizes_values() {
        let valid = validate_draft(draft(), true).unwrap();
        assert_eq!(valid.promotion_type.as_deref(), Some("PERCENTAGE"));
        assert_eq!(valid.scope.as_deref(), Some("ENTIRE_STORE"));
        assert_eq!(valid.start_date.as_deref(), Some("2024-03-01T00:00:00"));
        assert_eq!(valid.end_date.as_deref(), Some("2024-03-31T23:59:00"));
    }

    #[test]
    fn test_rejects_unknown_type() {
        let mut d = draft();
        d.promotion_type = Some("bogo".into());
        let err = validate_draft(d, true).unwrap_err();
        assert_eq!(err.to_string(), "Bad Request: Error: 'bogo' is not a valid PromotionType");
    }

    #[test]
    fn test_rejects_bad_date() {
        let mut d = draft();
        d.start_date = Some("2023/04/21".into());
        assert!(validate_draft(d, false).is_err());
    }

    #[test]
    fn test_name_required_only_when_asked() {
        let mut d = draft();
        d.name = None;
        assert!(validate_draft(d.clone(), true).is_err());
        assert!(validate_draft(d, false).is_ok());
    }
}
