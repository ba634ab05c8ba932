use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ClientError;

/// Ordered request parameters forwarded to the API.
///
/// Operations insert the fields they model first; caller-supplied extras are
/// merged afterwards and replace a modelled field on collision.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert any serializable value, e.g. a struct describing a transaction.
    pub fn with_serialized<T: Serialize>(
        mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self, ClientError> {
        let value = serde_json::to_value(value)
            .map_err(|e| ClientError::invalid_params(e.to_string()))?;
        self.insert(key, value);
        Ok(self)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Apply `extra` over `self`.
    pub fn merge(mut self, extra: Params) -> Self {
        for (key, value) in extra.0 {
            if self.0.contains_key(&key) {
                tracing::debug!(param = %key, "caller parameter overrides modelled field");
            }
            self.0.insert(key, value);
        }
        self
    }

    /// Percent-encoded query string without the leading `?`.
    ///
    /// `null` values are dropped, arrays become repeated keys, objects and
    /// nested arrays are sent as JSON text.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = query_scalar(item) {
                            pairs.push(encode_pair(key, &text));
                        }
                    }
                }
                other => {
                    if let Some(text) = query_scalar(other) {
                        pairs.push(encode_pair(key, &text));
                    }
                }
            }
        }
        pairs.join("&")
    }

    pub fn to_json_body(&self) -> Result<String, ClientError> {
        serde_json::to_string(&self.0).map_err(|e| ClientError::invalid_params(e.to_string()))
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Params {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

fn query_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        nested => Some(nested.to_string()),
    }
}

fn encode_pair(key: &str, value: &str) -> String {
    format!(
        "{}={}",
        urlencoding::encode(key),
        urlencoding::encode(value)
    )
}
