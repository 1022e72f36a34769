use super::super::http_response::geocode::GeocodeResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::geo::GeoCoordinate;

/// Request type for the /api/geocode endpoint of the proxy.
#[derive(Debug)]
pub struct GeocodeRequest {
    pub(crate) at: GeoCoordinate,
}

impl NoBodyHTTPRequestType for GeocodeRequest {}

impl HTTPRequestType for GeocodeRequest {
    type Response = GeocodeResponse;
    fn endpoint(&self) -> &'static str { "/api/geocode" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(&'static str, String)> { self.at.query_params() }
}
