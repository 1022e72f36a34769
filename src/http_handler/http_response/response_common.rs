use super::super::http_handler_common::ErrorReturn;
use super::super::transport::RawResponse;
use strum_macros::Display;

pub trait JSONBodyHTTPResponseType: HTTPResponseType {
    fn parse_json_body(response: RawResponse) -> Result<Self::ParsedResponseType, ResponseError> {
        Ok(serde_json::from_value(response.into_body())?)
    }
}

/// Marker for responses whose body deserializes directly into the response type itself.
pub trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    T: serde::de::DeserializeOwned,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    T: serde::de::DeserializeOwned,
{
    type ParsedResponseType = T;

    fn read_response(response: RawResponse) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response)?;
        Self::parse_json_body(resp)
    }
}

pub trait HTTPResponseType {
    type ParsedResponseType: serde::de::DeserializeOwned;

    fn read_response(response: RawResponse) -> Result<Self::ParsedResponseType, ResponseError>;

    fn unwrap_return_code(response: RawResponse) -> Result<RawResponse, ResponseError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.is_server_error() {
            Err(ResponseError::InternalServer(ErrorReturn::from_body(response.body())))
        } else if status.is_client_error() {
            Err(ResponseError::BadRequest(ErrorReturn::from_body(response.body())))
        } else {
            Err(ResponseError::Unknown)
        }
    }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    InternalServer(ErrorReturn),
    BadRequest(ErrorReturn),
    NoConnection,
    Timeout,
    Decode(serde_json::Error),
    /// The upstream answered successfully but left out data the response needs.
    Incomplete(ErrorReturn),
    Unknown,
}

impl std::error::Error for ResponseError {}

impl ResponseError {
    pub(crate) fn carried_message(&self) -> Option<&str> {
        match self {
            ResponseError::InternalServer(body)
            | ResponseError::BadRequest(body)
            | ResponseError::Incomplete(body) => body.error(),
            ResponseError::NoConnection
            | ResponseError::Timeout
            | ResponseError::Decode(_)
            | ResponseError::Unknown => None,
        }
    }
}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_decode() || value.is_body() {
            ResponseError::InternalServer(ErrorReturn::default())
        } else {
            ResponseError::Unknown
        }
    }
}

impl From<serde_json::Error> for ResponseError {
    fn from(value: serde_json::Error) -> Self { ResponseError::Decode(value) }
}
