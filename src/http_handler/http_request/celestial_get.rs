use super::super::http_response::celestial::CelestialPayload;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::geo::GeoCoordinate;

/// Request type for the /api/celestial endpoint of the proxy.
#[derive(Debug)]
pub struct CelestialRequest {
    pub(crate) at: GeoCoordinate,
}

impl NoBodyHTTPRequestType for CelestialRequest {}

impl HTTPRequestType for CelestialRequest {
    type Response = CelestialPayload;
    fn endpoint(&self) -> &'static str { "/api/celestial" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(&'static str, String)> { self.at.query_params() }
}
