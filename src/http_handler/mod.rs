pub use reqwest;

pub mod http_client;
pub mod http_request;
pub mod http_response;
mod http_handler_common;
pub mod transport;

pub use http_client::HTTPClient;
pub use http_handler_common::{ErrorReturn, HTTPError, LooseNumber, UserRecord};
pub use http_request::request_common::{HTTPRequestMethod, RequestError};
pub use http_response::response_common::ResponseError;
pub use transport::{Credentials, Exchange, RawResponse, Transport};
