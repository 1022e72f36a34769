use super::SkySource;
use crate::celestial::{SkyView, partition};
use crate::geo::GeoCoordinate;
use crate::http_handler::http_request::body_positions_get::BodyPositionsRequest;
use crate::http_handler::http_request::forecast_get::ForecastRequest;
use crate::http_handler::http_request::iss_now_get::IssNowRequest;
use crate::http_handler::http_request::request_common::NoBodyHTTPRequestType;
use crate::http_handler::http_request::reverse_get::ReverseGeocodeRequest;
use crate::http_handler::http_response::iss::IssPosition;
use crate::http_handler::{ErrorReturn, HTTPError, RequestError, ResponseError, Transport};
use crate::weather::WeatherReport;
use crate::{event, log};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;

/// Application id and secret for AstronomyAPI's HTTP Basic authentication.
#[derive(Clone)]
pub struct AstronomyCredentials {
    pub app_id: String,
    pub app_secret: String,
}

impl std::fmt::Debug for AstronomyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AstronomyCredentials").field("app_id", &self.app_id).finish_non_exhaustive()
    }
}

/// One transport per third-party service.
#[derive(Clone)]
pub struct Upstreams {
    /// Open-Meteo.
    pub forecast: Arc<dyn Transport>,
    /// AstronomyAPI.
    pub astronomy: Arc<dyn Transport>,
    /// Nominatim.
    pub geocoder: Arc<dyn Transport>,
    /// Open Notify.
    pub iss: Arc<dyn Transport>,
}

/// Data source that queries the third-party services itself.
///
/// Celestial rows are partitioned locally. Positions are requested for the local wall-clock
/// time of this process.
pub struct Aggregator {
    upstreams: Upstreams,
    credentials: Option<AstronomyCredentials>,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime { chrono::Local::now().naive_local() }

impl Aggregator {
    pub fn new(upstreams: Upstreams, credentials: Option<AstronomyCredentials>) -> Self {
        Self { upstreams, credentials, clock: local_now }
    }

    /// Replaces the wall clock used for celestial requests.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn has_credentials(&self) -> bool { self.credentials.is_some() }
}

#[async_trait]
impl SkySource for Aggregator {
    async fn weather(&self, at: GeoCoordinate) -> Result<WeatherReport, HTTPError> {
        let forecast = ForecastRequest { at }.send_request(self.upstreams.forecast.as_ref()).await?;
        forecast.into_current_weather().ok_or_else(|| {
            log!("Forecast for {at:?} came without current weather");
            ResponseError::Incomplete(ErrorReturn::new("Weather data not available")).into()
        })
    }

    async fn celestial(&self, at: GeoCoordinate) -> Result<SkyView, HTTPError> {
        let Some(creds) = &self.credentials else {
            return Err(RequestError::MissingCredentials(ErrorReturn::new("Missing AstronomyAPI credentials")).into());
        };
        let request = BodyPositionsRequest {
            at,
            local_time: (self.clock)(),
            app_id: creds.app_id.clone(),
            app_secret: creds.app_secret.clone(),
        };
        let response = request.send_request(self.upstreams.astronomy.as_ref()).await?;
        let view = partition(response.rows());
        event!("Partitioned {} bodies: {} visible", view.len(), view.visible().len());
        Ok(view)
    }

    async fn reverse_geocode(&self, at: GeoCoordinate) -> Result<serde_json::Value, HTTPError> {
        ReverseGeocodeRequest { at }.send_request(self.upstreams.geocoder.as_ref()).await
    }

    async fn iss_position(&self) -> Result<IssPosition, HTTPError> {
        let now = IssNowRequest {}.send_request(self.upstreams.iss.as_ref()).await?;
        Ok(now.into_position())
    }
}
