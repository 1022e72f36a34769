use super::SkySource;
use crate::celestial::SkyView;
use crate::geo::GeoCoordinate;
use crate::http_handler::http_request::celestial_get::CelestialRequest;
use crate::http_handler::http_request::geocode_get::GeocodeRequest;
use crate::http_handler::http_request::iss_get::IssRequest;
use crate::http_handler::http_request::request_common::NoBodyHTTPRequestType;
use crate::http_handler::http_request::weather_get::WeatherRequest;
use crate::http_handler::http_response::iss::IssPosition;
use crate::http_handler::{HTTPError, Transport};
use crate::weather::WeatherReport;
use async_trait::async_trait;
use std::sync::Arc;

/// Data source backed by the `/api/*` routes of the backend proxy.
pub struct ProxySource {
    backend: Arc<dyn Transport>,
}

impl ProxySource {
    pub fn new(backend: Arc<dyn Transport>) -> Self { Self { backend } }
}

#[async_trait]
impl SkySource for ProxySource {
    async fn weather(&self, at: GeoCoordinate) -> Result<WeatherReport, HTTPError> {
        WeatherRequest { at }.send_request(self.backend.as_ref()).await
    }

    async fn celestial(&self, at: GeoCoordinate) -> Result<SkyView, HTTPError> {
        let payload = CelestialRequest { at }.send_request(self.backend.as_ref()).await?;
        Ok(payload.into_sky_view())
    }

    async fn reverse_geocode(&self, at: GeoCoordinate) -> Result<serde_json::Value, HTTPError> {
        GeocodeRequest { at }.send_request(self.backend.as_ref()).await
    }

    async fn iss_position(&self) -> Result<IssPosition, HTTPError> {
        IssRequest {}.send_request(self.backend.as_ref()).await
    }
}
