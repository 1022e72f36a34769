use super::super::http_handler_common::{ErrorReturn, HTTPError};
use super::super::http_response::response_common::HTTPResponseType;
use super::super::transport::{Credentials, Exchange, Transport};
use std::future::Future;
use strum_macros::Display;

/// HTTP verbs used by the collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Common description of an endpoint request.
pub trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// `str` object representing the specific endpoint.
    fn endpoint(&self) -> &str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Additional headers, none by default.
    fn header_params(&self) -> reqwest::header::HeaderMap { reqwest::header::HeaderMap::new() }
    /// URL query parameters, none by default.
    fn query_params(&self) -> Vec<(&'static str, String)> { Vec::new() }
    /// Authentication for the request, anonymous by default.
    fn credentials(&self) -> Option<Credentials> { None }

    /// Builds the transport-level description without a body.
    fn exchange(&self) -> Exchange {
        Exchange {
            method: self.request_method(),
            endpoint: self.endpoint().to_string(),
            query: self.query_params(),
            headers: self.header_params(),
            credentials: self.credentials(),
            body: None,
        }
    }
}

/// Requests that carry a JSON body.
pub trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize + Sync;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    fn send_request(
        &self,
        transport: &dyn Transport,
    ) -> impl Future<Output = Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError>> + Send
    where Self: Sync {
        async move {
            let mut exchange = self.exchange();
            exchange.body = Some(serde_json::to_value(self.body()).map_err(RequestError::Encode)?);
            let raw = transport.exchange(exchange).await?;
            Ok(Self::Response::read_response(raw)?)
        }
    }
}

/// Requests without a body.
pub trait NoBodyHTTPRequestType: HTTPRequestType {
    fn send_request(
        &self,
        transport: &dyn Transport,
    ) -> impl Future<Output = Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError>> + Send
    where Self: Sync {
        async move {
            let raw = transport.exchange(self.exchange()).await?;
            Ok(Self::Response::read_response(raw)?)
        }
    }
}

/// Failures detected before a request leaves the process.
#[derive(Debug, Display)]
pub enum RequestError {
    /// Rejected input, shaped like the collaborators' own error bodies.
    InvalidInput(ErrorReturn),
    MissingCredentials(ErrorReturn),
    Encode(serde_json::Error),
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn invalid_input(message: &str) -> Self { RequestError::InvalidInput(ErrorReturn::new(message)) }

    pub(crate) fn carried_message(&self) -> Option<&str> {
        match self {
            RequestError::InvalidInput(body) | RequestError::MissingCredentials(body) => body.error(),
            RequestError::Encode(_) => None,
        }
    }
}
