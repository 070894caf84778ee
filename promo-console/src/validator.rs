// promo-console/src/validator.rs

//! Identifier validation
//!
//! Gate for every id-based operation: the raw field text must be a plain
//! base-10 integer before it is put into a path.

use thiserror::Error;

/// Shown when the id field does not hold a usable identifier
pub const INVALID_ID_MESSAGE: &str = "Please enter a valid numeric promotion ID";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidId {
    #[error("promotion id is empty")]
    Empty,

    #[error("promotion id '{0}' is not a whole number")]
    NotNumeric(String),

    #[error("promotion id '{0}' is too large")]
    OutOfRange(String),
}

/// Parse an id field. Digits only: no sign, whitespace, decimal point or exponent.
pub fn parse_id(raw: &str) -> Result<i64, InvalidId> {
    if raw.is_empty() {
        return Err(InvalidId::Empty);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidId::NotNumeric(raw.to_string()));
    }
    raw.parse::<i64>()
        .map_err(|_| InvalidId::OutOfRange(raw.to_string()))
}

pub fn is_valid_id(raw: &str) -> bool {
    parse_id(raw).is_ok()
}
