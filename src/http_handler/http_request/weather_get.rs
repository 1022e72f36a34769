use super::super::http_response::weather::WeatherReport;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::geo::GeoCoordinate;

/// Request type for the /api/weather endpoint of the proxy.
#[derive(Debug)]
pub struct WeatherRequest {
    pub(crate) at: GeoCoordinate,
}

impl NoBodyHTTPRequestType for WeatherRequest {}

impl HTTPRequestType for WeatherRequest {
    type Response = WeatherReport;
    fn endpoint(&self) -> &'static str { "/api/weather" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(&'static str, String)> { self.at.query_params() }
}
