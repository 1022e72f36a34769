use super::http_request::request_common::HTTPRequestMethod;
use super::http_response::response_common::ResponseError;
use async_trait::async_trait;

/// Authentication attached to a single exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Bearer(String),
    Basic { user: String, password: String },
}

/// A fully described outgoing request, independent of the HTTP library.
#[derive(Debug)]
pub struct Exchange {
    pub(crate) method: HTTPRequestMethod,
    pub(crate) endpoint: String,
    pub(crate) query: Vec<(&'static str, String)>,
    pub(crate) headers: reqwest::header::HeaderMap,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) body: Option<serde_json::Value>,
}

impl Exchange {
    pub fn method(&self) -> HTTPRequestMethod { self.method }
    pub fn endpoint(&self) -> &str { &self.endpoint }
    pub fn query(&self) -> &[(&'static str, String)] { &self.query }
    pub fn credentials(&self) -> Option<&Credentials> { self.credentials.as_ref() }
    pub fn body(&self) -> Option<&serde_json::Value> { self.body.as_ref() }

    /// Looks up a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }
}

/// A buffered response: status code plus the body decoded as JSON.
///
/// Empty bodies are `Null`, bodies that are not JSON are kept as a JSON string.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: reqwest::StatusCode,
    body: serde_json::Value,
}

impl RawResponse {
    pub fn new(status: reqwest::StatusCode, body: serde_json::Value) -> Self { Self { status, body } }
    pub fn status(&self) -> reqwest::StatusCode { self.status }
    pub fn body(&self) -> &serde_json::Value { &self.body }
    pub fn into_body(self) -> serde_json::Value { self.body }
}

/// The seam between typed requests and the network.
///
/// `HTTPClient` is the production implementation, tests plug in stubs.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn exchange(&self, exchange: Exchange) -> Result<RawResponse, ResponseError>;
}
