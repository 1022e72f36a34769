use super::super::http_response::geocode::GeocodeResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::geo::GeoCoordinate;

/// Request type for the Nominatim /reverse endpoint.
#[derive(Debug)]
pub struct ReverseGeocodeRequest {
    pub(crate) at: GeoCoordinate,
}

impl NoBodyHTTPRequestType for ReverseGeocodeRequest {}

impl HTTPRequestType for ReverseGeocodeRequest {
    type Response = GeocodeResponse;
    fn endpoint(&self) -> &'static str { "/reverse" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = self.at.query_params();
        params.push(("format", String::from("json")));
        params.push(("accept-language", String::from("en")));
        params
    }
}
