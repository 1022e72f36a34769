use super::super::http_response::iss::IssPosition;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /api/iss endpoint of the proxy.
#[derive(Debug)]
pub struct IssRequest {}

impl NoBodyHTTPRequestType for IssRequest {}

impl HTTPRequestType for IssRequest {
    type Response = IssPosition;
    fn endpoint(&self) -> &'static str { "/api/iss" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
