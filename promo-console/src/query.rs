// promo-console/src/query.rs

//! Search query construction
//!
//! Criteria are sparse: only the ones with a value make it into the query,
//! and they always come out in the revision's declared order.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use shared::ApiRevision;

use crate::form::{ACTIVE_TRUE, FormState, SearchForm};

/// Recognized criteria, in emission order
pub const CURRENT_CRITERIA: [&str; 3] = ["datetime", "promotion_type", "promotion_scope"];
pub const LEGACY_CRITERIA: [&str; 3] = ["name", "type", "active"];

/// Everything except RFC 3986 unreserved characters
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionValue {
    Scalar(String),
    /// Joined with `,`
    Multi(Vec<String>),
}

/// A named, optional search filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub name: String,
    pub value: CriterionValue,
}

impl Criterion {
    pub fn scalar(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: CriterionValue::Scalar(value.into()),
        }
    }

    pub fn multi<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            value: CriterionValue::Multi(values.into_iter().map(Into::into).collect()),
        }
    }
}

/// Query string builder for one API revision
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder {
    fields: &'static [&'static str],
    encode: bool,
}

impl QueryBuilder {
    /// Builder with percent-encoded values
    pub fn new(revision: ApiRevision) -> Self {
        let fields: &'static [&'static str] = match revision {
            ApiRevision::Current => &CURRENT_CRITERIA,
            ApiRevision::Legacy => &LEGACY_CRITERIA,
        };
        Self {
            fields,
            encode: true,
        }
    }

    /// Concatenate values as-is, for servers that do not decode the query
    pub fn raw(mut self) -> Self {
        self.encode = false;
        self
    }

    pub fn with_encoding(mut self, encode: bool) -> Self {
        self.encode = encode;
        self
    }

    /// `name=value` pairs joined with `&`; `""` when nothing has a value.
    ///
    /// Output order is the declared order whatever order `criteria` is in.
    /// For repeated names the last entry wins; unknown names are dropped.
    pub fn build(&self, criteria: &[Criterion]) -> String {
        for unknown in criteria.iter().filter(|c| !self.fields.contains(&c.name.as_str())) {
            tracing::debug!(name = %unknown.name, "Ignoring unrecognized search criterion");
        }

        self.fields
            .iter()
            .filter_map(|field| {
                let criterion = criteria.iter().rev().find(|c| c.name == *field)?;
                self.render(&criterion.value)
                    .map(|value| format!("{}={}", field, value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    fn render(&self, value: &CriterionValue) -> Option<String> {
        let joined = match value {
            CriterionValue::Scalar(s) => self.encode_value(s.trim()),
            CriterionValue::Multi(values) => values
                .iter()
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(|v| self.encode_value(v))
                .collect::<Vec<_>>()
                .join(","),
        };
        (!joined.is_empty()).then_some(joined)
    }

    fn encode_value(&self, value: &str) -> String {
        if self.encode {
            utf8_percent_encode(value, QUERY_VALUE).to_string()
        } else {
            value.to_string()
        }
    }
}

/// Criteria taken from the console fields.
///
/// Current revision reads the search panel. Legacy reads the record form:
/// name, type and `active`, the latter only when the selector says `"true"`.
pub fn search_criteria(revision: ApiRevision, form: &FormState, search: &SearchForm) -> Vec<Criterion> {
    match revision {
        ApiRevision::Current => vec![
            Criterion::scalar("datetime", search.datetime.as_str()),
            Criterion::multi("promotion_type", search.promotion_types.iter().cloned()),
            Criterion::multi("promotion_scope", search.promotion_scopes.iter().cloned()),
        ],
        ApiRevision::Legacy => vec![
            Criterion::scalar("name", form.name.as_str()),
            Criterion::scalar("type", form.promotion_type.as_str()),
            Criterion::scalar(
                "active",
                if form.is_active_selected() { ACTIVE_TRUE } else { "" },
            ),
        ],
    }
}
