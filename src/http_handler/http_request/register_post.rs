use super::super::http_response::auth::AuthResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /api/auth/register endpoint.
#[derive(serde::Serialize, Debug)]
pub struct RegisterRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

impl JSONBodyHTTPRequestType for RegisterRequest {
    type Body = RegisterRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for RegisterRequest {
    type Response = AuthResponse;
    fn endpoint(&self) -> &'static str { "/api/auth/register" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
