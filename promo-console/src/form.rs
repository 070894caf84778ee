// promo-console/src/form.rs

//! Form state
//!
//! The console's fields as plain text, the way an operator types them.
//! [`FormState::capture`] turns them into a [`PromotionDraft`];
//! [`FormState::apply`] writes a [`Promotion`] back.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::datetime::{normalize_for_form, parse_datetime};
use shared::models::{Promotion, PromotionDraft};

/// Selector option values for `active`
pub const ACTIVE_TRUE: &str = "true";
pub const ACTIVE_FALSE: &str = "false";

/// Single-record form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub id: String,
    pub name: String,
    pub code: String,
    pub value: String,
    pub promotion_type: String,
    pub description: String,
    /// Selector text: `""`, `"true"` or `"false"`
    pub active: String,
    pub scope: String,
    pub start_date: String,
    pub end_date: String,
}

impl FormState {
    /// Draft from every field except `id`
    pub fn capture(&self) -> PromotionDraft {
        PromotionDraft {
            name: text(&self.name),
            code: text(&self.code),
            value: decimal(&self.value),
            promotion_type: text(&self.promotion_type),
            description: text(&self.description),
            active: self.is_active_selected(),
            scope: text(&self.scope),
            start_date: text(&self.start_date),
            end_date: text(&self.end_date),
        }
    }

    /// Populate every field from a record, id included.
    ///
    /// `value` and the dates keep their current text when it already
    /// denotes the record's value, so `apply(capture())` is lossless.
    pub fn apply(&mut self, record: &Promotion) {
        self.id = record.id.to_string();
        self.name = record.name.clone().unwrap_or_default();
        self.code = record.code.clone().unwrap_or_default();
        self.value = match record.value {
            Some(v) if parse_decimal(&self.value).ok().flatten() == Some(v) => {
                std::mem::take(&mut self.value)
            }
            Some(v) => v.to_string(),
            None => String::new(),
        };
        self.promotion_type = record.promotion_type.clone().unwrap_or_default();
        self.description = record.description.clone().unwrap_or_default();
        self.active = if record.active { ACTIVE_TRUE } else { ACTIVE_FALSE }.to_string();
        self.scope = record.scope.clone().unwrap_or_default();
        self.start_date = date(&mut self.start_date, record.start_date.as_deref());
        self.end_date = date(&mut self.end_date, record.end_date.as_deref());
    }

    /// Reset every editable field; `id` is left alone
    pub fn clear(&mut self) {
        *self = Self {
            id: std::mem::take(&mut self.id),
            ..Self::default()
        };
    }

    /// Whole-form clear, `id` included
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_active_selected(&self) -> bool {
        self.active == ACTIVE_TRUE
    }
}

/// Search panel (current revision criteria)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    pub datetime: String,
    pub promotion_types: Vec<String>,
    pub promotion_scopes: Vec<String>,
}

impl SearchForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn text(field: &str) -> Option<String> {
    if field.trim().is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

fn parse_decimal(field: &str) -> Result<Option<Decimal>, rust_decimal::Error> {
    let raw = field.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Decimal::from_str(raw).map(Some)
}

fn decimal(field: &str) -> Option<Decimal> {
    parse_decimal(field).unwrap_or_else(|e| {
        tracing::warn!(value = field.trim(), error = %e, "Ignoring unparsable promotion value");
        None
    })
}

/// Keep `current` if it names the same instant as `record`
fn date(current: &mut String, record: Option<&str>) -> String {
    let Some(record) = record else {
        return String::new();
    };
    let same = match (parse_datetime(current), parse_datetime(record)) {
        (Some(a), Some(b)) => a == b,
        _ => current.as_str() == record,
    };
    if same {
        std::mem::take(current)
    } else {
        normalize_for_form(record)
    }
}
