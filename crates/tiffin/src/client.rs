use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde_json::Value;

use crate::config::{ClientConfig, ResolvedConfig};
use crate::domain::value::{error_message, is_truthy};
use crate::domain::ResultObject;
use crate::error::ClientError;
use crate::http_client::{HttpClient, HttpMethod, HttpRequest, ReqwestHttpClient};
use crate::params::Params;

/// One call against the API, relative to the client's base URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiRequest {
    pub path: String,
    pub method: HttpMethod,
    pub headers: BTreeMap<String, String>,
    pub params: Params,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            ..Self::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Extra header for this call only; replaces a default header of the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }
}

/// Lunch Money API client.
///
/// Holds the resolved base URL, the default headers and a transport. None of
/// these change after construction, so a client can be shared freely.
#[derive(Clone)]
pub struct LunchMoney {
    config: ResolvedConfig,
    headers: BTreeMap<String, String>,
    http_client: Arc<dyn HttpClient>,
}

impl LunchMoney {
    /// Client for the production API. An empty key falls back to the
    /// `LUNCH_MONEY_API_KEY` environment variable.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::from_config(ClientConfig::new().api_key(api_key))
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_config(ClientConfig::new())
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(
        config: ClientConfig,
        http_client: Arc<dyn HttpClient>,
    ) -> Result<Self, ClientError> {
        Ok(Self::from_resolved(config.resolve()?, http_client))
    }

    pub fn from_resolved(config: ResolvedConfig, http_client: Arc<dyn HttpClient>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(String::from("content-type"), String::from("application/json"));
        headers.insert(
            String::from("authorization"),
            format!("Bearer {}", config.api_key()),
        );

        Self {
            config,
            headers,
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Issue one request and return the decoded body.
    ///
    /// GET and DELETE send `params` as a query string, POST and PUT as a JSON
    /// body. A JSON object body with a truthy `error` field fails with
    /// [`ClientError::Api`]; bodies of any other shape are returned as is.
    pub async fn query(&self, request: ApiRequest) -> Result<Value, ClientError> {
        let ApiRequest {
            path,
            method,
            headers,
            params,
        } = request;

        let mut url = self.config.url_for(&path);
        let mut body = None;
        if method.carries_body() {
            if !params.is_empty() {
                body = Some(params.to_json_body()?);
            }
        } else {
            let query = params.to_query_string();
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query);
            }
        }

        let mut http_request = HttpRequest::new(method, url)
            .with_headers(&self.headers)
            .with_headers(&headers);
        if let Some(body) = body {
            http_request = http_request.with_body(body);
        }

        tracing::debug!(%method, path = %path, params = params.len(), "lunch money request");
        let response = self.http_client.execute(http_request).await?;
        let status = response.status;

        let decoded: Value = match serde_json::from_str(&response.body) {
            Ok(value) => value,
            Err(_) if !response.is_success() => {
                return Err(ClientError::api(format!(
                    "{method} {path} returned status {status}"
                )));
            }
            Err(source) => return Err(ClientError::Decode { status, source }),
        };

        if let Some(error) = decoded
            .as_object()
            .and_then(|fields| fields.get("error"))
            .filter(|error| is_truthy(error))
        {
            return Err(ClientError::api(error_message(error)));
        }

        if !response.is_success() {
            tracing::warn!(%method, path = %path, status, "non-success status without error field");
        }

        Ok(decoded)
    }

    /// Wrap each element of a list body (or of `body[wrapper]`) in a [`ResultObject`].
    pub fn objectify(
        body: Value,
        wrapper: Option<&str>,
    ) -> Result<Vec<ResultObject>, ClientError> {
        let list = match wrapper {
            Some(field) => match body {
                Value::Object(mut fields) if fields.contains_key(field) => {
                    fields.remove(field).unwrap_or_default()
                }
                other => {
                    return Err(ClientError::unexpected_shape(
                        &format!("field '{field}'"),
                        &other,
                    ))
                }
            },
            None => body,
        };

        let items = match list {
            Value::Array(items) => items,
            other => return Err(ClientError::unexpected_shape("a list", &other)),
        };

        items
            .into_iter()
            .map(|item| {
                ResultObject::try_from(item)
                    .map_err(|other| ClientError::unexpected_shape("a list of objects", &other))
            })
            .collect()
    }

    /// Wrap an object body in a single [`ResultObject`].
    pub fn objectify_one(body: Value) -> Result<ResultObject, ClientError> {
        ResultObject::try_from(body)
            .map_err(|other| ClientError::unexpected_shape("an object", &other))
    }
}

impl Debug for LunchMoney {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LunchMoney")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objectify_unwraps_the_named_field_in_order() {
        let body = json!({"categories": [{"id": 1, "name": "Food"}, {"id": 2, "name": "Rent"}]});

        let result = LunchMoney::objectify(body, Some("categories")).expect("list body");

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name(), Some("Food"));
        assert_eq!(result[1].id(), Some(2));
    }

    #[test]
    fn objectify_accepts_bare_lists() {
        let result =
            LunchMoney::objectify(json!([{"name": "coffee"}]), None).expect("bare list body");
        assert_eq!(result[0].to_string(), "<coffee>");
    }

    #[test]
    fn missing_wrapper_is_an_api_error() {
        let error = LunchMoney::objectify(json!({"unexpected": []}), Some("categories"))
            .expect_err("wrapper is absent");

        assert!(error.is_api());
        assert!(error.message().contains("categories"));
    }

    #[test]
    fn non_list_and_non_object_elements_are_rejected() {
        assert!(LunchMoney::objectify(json!({"tags": 3}), Some("tags"))
            .expect_err("not a list")
            .is_api());
        assert!(LunchMoney::objectify(json!([1, 2]), None)
            .expect_err("not objects")
            .is_api());
        assert!(LunchMoney::objectify_one(json!(true))
            .expect_err("not an object")
            .is_api());
    }

    #[test]
    fn api_request_builders_set_method_and_path() {
        let request = ApiRequest::delete("budgets")
            .header("X-Trace", "1")
            .params(Params::new().with("category_id", "4"));

        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path, "budgets");
        assert_eq!(request.headers.get("X-Trace").map(String::as_str), Some("1"));
        assert_eq!(request.params.len(), 1);
    }
}
