use super::super::http_response::auth::AuthResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /api/auth/login endpoint.
#[derive(serde::Serialize, Debug)]
pub struct LoginRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

impl JSONBodyHTTPRequestType for LoginRequest {
    type Body = LoginRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for LoginRequest {
    type Response = AuthResponse;
    fn endpoint(&self) -> &'static str { "/api/auth/login" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
