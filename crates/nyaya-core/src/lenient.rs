//! Lenient decoders for untrusted dashboard fields.
//!
//! The crime dashboards receive pandas-generated JSON: counts may arrive as
//! integers, integral floats (`1234.0`), numeric strings, `null`, or not at
//! all. These decoders map anything unusable to `None` instead of failing
//! the whole payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a non-negative integral count. Unusable values become `None`.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

/// Decode a display label. Numbers are rendered as their decimal text.
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value.
pub fn label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(
            number
                .as_u64()
                .map_or_else(|| number.to_string(), |n| n.to_string()),
        ),
        _ => None,
    })
}

/// Interpret a JSON value as a count.
#[must_use]
pub fn count_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number.as_f64().and_then(|float| {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let whole = float as u64;
                #[allow(clippy::cast_precision_loss)]
                let exact = float.is_finite() && float >= 0.0 && whole as f64 == float;
                exact.then_some(whole)
            })
        }),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    }
}
