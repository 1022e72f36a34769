use super::super::http_response::delete_account::DeleteAccountResponse;
use super::super::transport::Credentials;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /api/protected/delete endpoint.
#[derive(Debug)]
pub struct DeleteAccountRequest {
    pub(crate) token: String,
}

impl NoBodyHTTPRequestType for DeleteAccountRequest {}

impl HTTPRequestType for DeleteAccountRequest {
    type Response = DeleteAccountResponse;
    fn endpoint(&self) -> &'static str { "/api/protected/delete" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Delete }
    fn credentials(&self) -> Option<Credentials> { Some(Credentials::Bearer(self.token.clone())) }
}
