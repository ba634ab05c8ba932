//! Helpers for reading loosely-typed JSON fields out of API responses.

use serde_json::Value;

use crate::error::ClientError;

/// Truthiness in the sense the API uses for flags and empty markers:
/// `null`, `false`, zero, `""`, `[]` and `{}` are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Integer id from a whole number (`5` or `5.0`) or a numeric string.
pub fn to_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|n| n.fract() == 0.0 && n.abs() < i64::MAX as f64)
                .map(|n| n as i64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

pub fn to_id_list(value: &Value) -> Option<Vec<i64>> {
    value.as_array()?.iter().map(to_id).collect()
}

/// Look up `field` on an object body, failing with a shape error.
pub fn required_field<'a>(body: &'a Value, field: &str) -> Result<&'a Value, ClientError> {
    body.get(field)
        .ok_or_else(|| ClientError::unexpected_shape(&format!("field '{field}'"), body))
}

pub fn required_id(body: &Value, field: &str) -> Result<i64, ClientError> {
    let value = required_field(body, field)?;
    to_id(value).ok_or_else(|| ClientError::unexpected_shape(&format!("integer '{field}'"), body))
}

pub fn required_id_list(body: &Value, field: &str) -> Result<Vec<i64>, ClientError> {
    let value = required_field(body, field)?;
    to_id_list(value)
        .ok_or_else(|| ClientError::unexpected_shape(&format!("integer list '{field}'"), body))
}

/// Text of a remote `error` field; lists of messages are joined.
pub fn error_message(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}
