use std::fmt::{Display, Formatter};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::value::is_truthy;
use crate::error::LookupError;

/// Keys consulted, in order, for the display label.
const LABEL_KEYS: [&str; 3] = ["name", "original_name", "category_name"];

/// One JSON object returned by the API (a category, a transaction, a budget
/// row, ...), readable by key or by field name.
///
/// Values are kept exactly as decoded; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultObject(Map<String, Value>);

impl ResultObject {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Keyed lookup.
    pub fn item(&self, key: &str) -> Result<&Value, LookupError> {
        self.0.get(key).ok_or_else(|| LookupError::KeyNotFound {
            key: key.to_owned(),
        })
    }

    /// Named-field lookup. Same value as [`Self::item`], different failure.
    pub fn attr(&self, name: &str) -> Result<&Value, LookupError> {
        self.0.get(name).ok_or_else(|| LookupError::AttributeNotFound {
            name: name.to_owned(),
        })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Deserialize one field into `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T, LookupError> {
        let value = self.item(key)?;
        T::deserialize(value).map_err(|e| LookupError::InvalidType {
            key: key.to_owned(),
            message: e.to_string(),
        })
    }

    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// First truthy value among `name`, `original_name`, `category_name`.
    pub fn label(&self) -> Option<String> {
        LABEL_KEYS
            .iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| is_truthy(value))
            .map(|value| match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Display for ResultObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.label() {
            Some(label) => write!(f, "<{label}>"),
            None => write!(f, "<{}>", Value::Object(self.0.clone())),
        }
    }
}

impl From<Map<String, Value>> for ResultObject {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

impl TryFrom<Value> for ResultObject {
    type Error = Value;

    /// Fails with the original value when it is not a JSON object.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(other),
        }
    }
}

impl IntoIterator for ResultObject {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
