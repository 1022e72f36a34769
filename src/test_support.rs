//! Shared fixtures for the in-crate tests.

use crate::http_handler::{Exchange, HTTPRequestMethod, RawResponse, ResponseError, Transport};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned reply of the stub for one endpoint.
#[derive(Debug, Clone)]
pub(crate) enum StubReply {
    Json(StatusCode, serde_json::Value),
    Fail(fn() -> ResponseError),
}

/// A `Transport` answering from a table keyed by endpoint and recording every exchange.
#[derive(Debug, Default)]
pub(crate) struct StubTransport {
    replies: Mutex<HashMap<String, StubReply>>,
    seen: Mutex<Vec<SeenExchange>>,
}

/// What the stub saw of an exchange.
#[derive(Debug, Clone)]
pub(crate) struct SeenExchange {
    pub(crate) method: HTTPRequestMethod,
    pub(crate) endpoint: String,
    pub(crate) query: Vec<(&'static str, String)>,
    pub(crate) bearer: Option<String>,
    pub(crate) basic_user: Option<String>,
    pub(crate) body: Option<serde_json::Value>,
}

impl StubTransport {
    pub(crate) fn new() -> Self { Self::default() }

    pub(crate) fn reply(&self, endpoint: &str, status: u16, body: serde_json::Value) -> &Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.replies.lock().unwrap().insert(endpoint.to_string(), StubReply::Json(status, body));
        self
    }

    pub(crate) fn fail(&self, endpoint: &str, error: fn() -> ResponseError) -> &Self {
        self.replies.lock().unwrap().insert(endpoint.to_string(), StubReply::Fail(error));
        self
    }

    pub(crate) fn seen(&self) -> Vec<SeenExchange> { self.seen.lock().unwrap().clone() }

    pub(crate) fn calls_to(&self, endpoint: &str) -> usize {
        self.seen.lock().unwrap().iter().filter(|s| s.endpoint == endpoint).count()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn exchange(&self, exchange: Exchange) -> Result<RawResponse, ResponseError> {
        let (bearer, basic_user) = match exchange.credentials() {
            Some(crate::http_handler::Credentials::Bearer(t)) => (Some(t.clone()), None),
            Some(crate::http_handler::Credentials::Basic { user, .. }) => (None, Some(user.clone())),
            None => (None, None),
        };
        self.seen.lock().unwrap().push(SeenExchange {
            method: exchange.method(),
            endpoint: exchange.endpoint().to_string(),
            query: exchange.query().to_vec(),
            bearer,
            basic_user,
            body: exchange.body().cloned(),
        });
        let reply = self.replies.lock().unwrap().get(exchange.endpoint()).cloned();
        match reply {
            Some(StubReply::Json(status, body)) => Ok(RawResponse::new(status, body)),
            Some(StubReply::Fail(error)) => Err(error()),
            None => Ok(RawResponse::new(StatusCode::NOT_FOUND, serde_json::json!({ "error": "Not found" }))),
        }
    }
}
