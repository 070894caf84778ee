// promo-client/src/codec.rs

//! Wire codec
//!
//! Maps service JSON onto the canonical [`Promotion`] and back. List
//! responses go through [`decode_record`] element by element, so a record
//! from a search decodes exactly like one fetched individually.

use serde_json::Value;
use shared::ApiRevision;
use shared::models::{LegacyPromotion, LegacyPromotionDraft, Promotion, PromotionDraft};

use crate::{ClientError, ClientResult};

/// Decode one record in the given revision's shape
pub fn decode_record(revision: ApiRevision, value: Value) -> ClientResult<Promotion> {
    let decoded = match revision {
        ApiRevision::Current => serde_json::from_value::<Promotion>(value),
        ApiRevision::Legacy => serde_json::from_value::<LegacyPromotion>(value).map(Promotion::from),
    };
    decoded.map_err(|e| ClientError::InvalidResponse(format!("Invalid promotion record: {}", e)))
}

/// Decode a list response, keeping server order
pub fn decode_records(revision: ApiRevision, value: Value) -> ClientResult<Vec<Promotion>> {
    let Value::Array(items) = value else {
        return Err(ClientError::InvalidResponse(format!(
            "Expected a list of promotions, got {}",
            json_kind(&value)
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            decode_record(revision, item).map_err(|e| match e {
                ClientError::InvalidResponse(msg) => {
                    ClientError::InvalidResponse(format!("item {}: {}", index, msg))
                }
                other => other,
            })
        })
        .collect()
}

/// Encode a draft in the given revision's shape
pub fn encode_draft(revision: ApiRevision, draft: &PromotionDraft) -> ClientResult<Value> {
    let value = match revision {
        ApiRevision::Current => serde_json::to_value(draft)?,
        ApiRevision::Legacy => serde_json::to_value(LegacyPromotionDraft::from(draft))?,
    };
    Ok(value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
