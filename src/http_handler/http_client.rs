use super::http_request::request_common::HTTPRequestMethod;
use super::http_response::response_common::ResponseError;
use super::transport::{Credentials, Exchange, RawResponse, Transport};
use crate::event;
use async_trait::async_trait;
use std::time::Duration;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// One client exists per collaborator (backend proxy or direct upstream).
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Default timeout bounding every request.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Constructs a new `HTTPClient` with the given base URL and request timeout.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"http://localhost:5000"`).
    /// * `timeout` – Upper bound for a single request.
    ///
    /// # Errors
    /// Returns the `reqwest::Error` if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<HTTPClient, reqwest::Error> {
        Ok(HTTPClient {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .user_agent(concat!("above-you/", env!("CARGO_PKG_VERSION")))
                .build()?,
            base_url: String::from(base_url.trim_end_matches('/')),
        })
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }
}

#[async_trait]
impl Transport for HTTPClient {
    async fn exchange(&self, exchange: Exchange) -> Result<RawResponse, ResponseError> {
        let url = format!("{}{}", self.base_url, exchange.endpoint);
        event!("{:?} {url}", exchange.method);
        let mut builder = match exchange.method {
            HTTPRequestMethod::Get => self.client().get(url),
            HTTPRequestMethod::Post => self.client().post(url),
            HTTPRequestMethod::Put => self.client().put(url),
            HTTPRequestMethod::Delete => self.client().delete(url),
        };
        builder = builder.headers(exchange.headers);
        if !exchange.query.is_empty() {
            builder = builder.query(&exchange.query);
        }
        builder = match exchange.credentials {
            Some(Credentials::Bearer(token)) => builder.bearer_auth(token),
            Some(Credentials::Basic { user, password }) => builder.basic_auth(user, Some(password)),
            None => builder,
        };
        if let Some(body) = exchange.body {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        Ok(RawResponse::new(status, body))
    }
}
