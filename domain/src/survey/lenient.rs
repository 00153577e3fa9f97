//! Forgiving field decoders for persisted records.
//!
//! Stored drafts come from older builds and hand edits, so a single badly
//! typed field must cost at most that field (or that one item), never the
//! whole record. Scalars are coerced where the meaning is obvious (a numeric
//! id becomes its decimal string); anything else falls back to the field's
//! default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// String-ish value: strings as-is, numbers and booleans in text form.
pub(crate) fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Label list: every element coerced to text, `null` and nested values as "".
pub(crate) fn as_labels(value: &Value) -> Option<Vec<String>> {
    value.as_array().map(|items| {
        items
            .iter()
            .map(|item| as_text(item).unwrap_or_default())
            .collect()
    })
}

/// Decodes every element that decodes; the rest are dropped.
pub(crate) fn collect<T: DeserializeOwned>(values: &[Value]) -> Vec<T> {
    values
        .iter()
        .filter_map(|value| T::deserialize(value).ok())
        .collect()
}

pub(crate) fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(as_text(&Value::deserialize(d)?))
}

pub(crate) fn text_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(text(d)?.unwrap_or_default())
}

pub(crate) fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    Ok(Value::deserialize(d)?.as_bool())
}

pub(crate) fn items<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(values) => collect(&values),
        _ => Vec::new(),
    })
}
