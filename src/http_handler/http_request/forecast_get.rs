use super::super::http_response::weather::ForecastResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::geo::GeoCoordinate;

/// Request type for the Open-Meteo /v1/forecast endpoint.
#[derive(Debug)]
pub struct ForecastRequest {
    pub(crate) at: GeoCoordinate,
}

impl NoBodyHTTPRequestType for ForecastRequest {}

impl HTTPRequestType for ForecastRequest {
    type Response = ForecastResponse;
    fn endpoint(&self) -> &'static str { "/v1/forecast" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.at.latitude().to_string()),
            ("longitude", self.at.longitude().to_string()),
            ("current_weather", String::from("true")),
        ]
    }
}
