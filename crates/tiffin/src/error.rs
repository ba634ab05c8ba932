use serde_json::Value;
use thiserror::Error;

use crate::config::API_KEY_ENV;
use crate::http_client::HttpError;

/// Errors returned by [`crate::LunchMoney`] construction and operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(
        "a Lunch Money API key is required; pass one explicitly or set the '{}' environment variable",
        API_KEY_ENV
    )]
    MissingApiKey,

    /// The remote reported an error, or a success body lacked a required field.
    #[error("{message}")]
    Api { message: String },

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("response (status {status}) is not valid JSON: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid request parameters: {message}")]
    InvalidParams { message: String },
}

impl From<time::error::Format> for ClientError {
    fn from(error: time::error::Format) -> Self {
        Self::invalid_params(format!("date is not representable: {error}"))
    }
}

impl ClientError {
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Shape error for a body that does not carry what the operation expects.
    pub fn unexpected_shape(expected: &str, body: &Value) -> Self {
        Self::api(format!("expected {expected} in response, got: {body}"))
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    /// True for remote-reported errors and response shape anomalies.
    pub const fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    pub fn message(&self) -> String {
        match self {
            Self::Api { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Failed lookup on a [`crate::ResultObject`].
///
/// Keyed and named-field access fail differently even though both stem from
/// the same missing key, so callers can tell which style they used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("key '{key}' not found")]
    KeyNotFound { key: String },

    #[error("result object has no attribute '{name}'")]
    AttributeNotFound { name: String },

    #[error("field '{key}' has unexpected type: {message}")]
    InvalidType { key: String, message: String },
}
