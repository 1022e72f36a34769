use super::super::http_response::celestial::BodyPositionsResponse;
use super::super::transport::Credentials;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use crate::geo::GeoCoordinate;
use chrono::NaiveDateTime;

/// Request type for the AstronomyAPI /api/v2/bodies/positions endpoint.
///
/// Positions are requested for a single local instant at sea level.
#[derive(Debug)]
pub struct BodyPositionsRequest {
    pub(crate) at: GeoCoordinate,
    pub(crate) local_time: NaiveDateTime,
    pub(crate) app_id: String,
    pub(crate) app_secret: String,
}

impl NoBodyHTTPRequestType for BodyPositionsRequest {}

impl HTTPRequestType for BodyPositionsRequest {
    type Response = BodyPositionsResponse;
    fn endpoint(&self) -> &'static str { "/api/v2/bodies/positions" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let date = self.local_time.format("%Y-%m-%d").to_string();
        vec![
            ("latitude", self.at.latitude().to_string()),
            ("longitude", self.at.longitude().to_string()),
            ("elevation", String::from("0")),
            ("from_date", date.clone()),
            ("to_date", date),
            ("time", self.local_time.format("%H:%M:%S").to_string()),
        ]
    }
    fn credentials(&self) -> Option<Credentials> {
        Some(Credentials::Basic { user: self.app_id.clone(), password: self.app_secret.clone() })
    }
}
