//! Decoding of list defaults.
//!
//! A default starting with `[` is read as a JSON array. Anything else is
//! treated as comma-separated text, the same shape a user types on the
//! command line (`--tags a,b,c`).

use serde_json::Value;

use super::{FlagKind, FlagScalar};
use crate::ConversionError;

/// Decodes `raw` into a list of `T`.
///
/// Blank input decodes to an empty list.
pub(super) fn decode<T: FlagScalar>(raw: &str) -> Result<Vec<T>, ConversionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return decode_json(trimmed);
    }
    trimmed
        .split(',')
        .map(|item| T::parse_scalar(item.trim()))
        .collect()
}

fn decode_json<T: FlagScalar>(raw: &str) -> Result<Vec<T>, ConversionError> {
    let items: Vec<Value> = serde_json::from_str(raw)
        .map_err(|err| ConversionError::new(FlagKind::List(T::KIND), raw, err))?;
    items
        .iter()
        .map(|item| match item {
            Value::String(text) => T::parse_scalar(text),
            Value::Number(number) => T::parse_json_number(&number.to_string()),
            other => T::parse_scalar(&other.to_string()),
        })
        .collect()
}
