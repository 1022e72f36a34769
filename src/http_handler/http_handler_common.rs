use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::Display;

/// The `{ "error": "..." }` body every collaborator uses to report a failure.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorReturn {
    #[serde(default)]
    error: Option<String>,
}

impl ErrorReturn {
    pub fn new(message: impl Into<String>) -> Self { Self { error: Some(message.into()) } }

    /// Extracts the error body from an arbitrary JSON payload.
    ///
    /// Anything that is not an object with a string `error` field yields an empty body.
    pub fn from_body(body: &serde_json::Value) -> Self {
        let error = body.get("error").and_then(serde_json::Value::as_str).map(String::from);
        Self { error }
    }

    pub fn error(&self) -> Option<&str> { self.error.as_deref() }
}

/// Authenticated user as returned by the auth service.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    id: i64,
    email: String,
}

impl UserRecord {
    pub fn new(id: i64, email: impl Into<String>) -> Self { Self { id, email: email.into() } }
    pub fn id(&self) -> i64 { self.id }
    pub fn email(&self) -> &str { &self.email }
}

/// A number that some upstreams send as JSON number and others as numeric text.
///
/// The raw value is kept so that it can be reported verbatim. Anything that is neither a
/// number nor text, `null` included, lands in `Other` and reads as `NaN`.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl LooseNumber {
    /// The value as `f64`, `NaN` if the text does not hold a number.
    pub fn value(&self) -> f64 {
        match self {
            LooseNumber::Number(n) => *n,
            LooseNumber::Text(t) => t.trim().parse().unwrap_or(f64::NAN),
            LooseNumber::Other(_) => f64::NAN,
        }
    }

    /// The value as it was received.
    pub fn raw(&self) -> String {
        match self {
            LooseNumber::Number(n) => n.to_string(),
            LooseNumber::Text(t) => t.clone(),
            LooseNumber::Other(v) => v.to_string(),
        }
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self { LooseNumber::Number(value) }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self { LooseNumber::Text(value.to_string()) }
}

#[derive(Debug, Display)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self { HTTPError::HTTPRequestError(value) }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::HTTPResponseError(value) }
}

impl HTTPError {
    /// The `{error}` message carried by this error, if any.
    ///
    /// Validation failures carry their own message, upstream failures carry whatever the
    /// collaborator put into its error body. Transport failures carry nothing.
    pub fn carried_message(&self) -> Option<&str> {
        match self {
            HTTPError::HTTPRequestError(e) => e.carried_message(),
            HTTPError::HTTPResponseError(e) => e.carried_message(),
        }
    }
}
