//! Shared test doubles for the behaviour suites.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tiffin::{ClientConfig, HttpClient, HttpError, HttpRequest, HttpResponse, LunchMoney};

pub const BASE: &str = "https://lm.test/v1/";

/// Transport that replays canned responses and records every request.
#[derive(Debug, Default)]
pub struct RecordingHttpClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn replying(body: Value) -> Arc<Self> {
        Self::with_responses(vec![Ok(HttpResponse::ok_json(body.to_string()))])
    }

    pub fn with_responses(responses: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    pub fn only_request(&self) -> HttpRequest {
        let mut requests = self.recorded_requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self
            .responses
            .lock()
            .expect("response queue should not be poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::new("no canned response left")));
        Box::pin(async move { response })
    }
}

pub fn client_for(transport: Arc<RecordingHttpClient>) -> LunchMoney {
    LunchMoney::with_http_client(
        ClientConfig::new()
            .api_key("test-key")
            .endpoint("https://lm.test"),
        transport,
    )
    .expect("explicit key always resolves")
}

/// Query pairs of a recorded URL, percent-decoded, in order.
pub fn query_pairs(request: &HttpRequest) -> Vec<(String, String)> {
    let Some((_, query)) = request.url.split_once('?') else {
        return Vec::new();
    };
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| {
            (
                urlencoding::decode(key).expect("utf-8 key").into_owned(),
                urlencoding::decode(value).expect("utf-8 value").into_owned(),
            )
        })
        .collect()
}

pub fn query_value(request: &HttpRequest, key: &str) -> Option<String> {
    query_pairs(request)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

pub fn json_body(request: &HttpRequest) -> Value {
    serde_json::from_str(request.body.as_deref().expect("request has a body"))
        .expect("body is JSON")
}
