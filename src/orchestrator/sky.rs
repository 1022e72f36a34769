use super::{CELESTIAL, ISS, LOCATION, RequestOrchestrator, WEATHER};
use crate::celestial::SkyView;
use crate::geo::GeoCoordinate;
use crate::http_handler::http_response::geocode::display_name;
use crate::http_handler::http_response::iss::IssPosition;
use crate::http_handler::{HTTPError, RequestError};
use crate::weather::WeatherReport;

fn coordinate(lat: f64, lon: f64) -> Result<GeoCoordinate, RequestError> {
    GeoCoordinate::new(lat, lon).map_err(|_| RequestError::invalid_input("Missing coordinates"))
}

impl RequestOrchestrator {
    /// # Errors
    /// - `HTTPError` for non-finite coordinates and upstream failures.
    pub async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<WeatherReport, HTTPError> {
        self.run(WEATHER, "Failed to fetch weather data", async {
            let at = coordinate(lat, lon)?;
            self.k.sky().weather(at).await
        })
        .await
    }

    /// # Errors
    /// - `HTTPError` for non-finite coordinates and upstream failures.
    pub async fn fetch_celestial(&self, lat: f64, lon: f64) -> Result<SkyView, HTTPError> {
        self.run(CELESTIAL, "Failed to fetch celestial data", async {
            let at = coordinate(lat, lon)?;
            self.k.sky().celestial(at).await
        })
        .await
    }

    /// Reverse-geocodes the coordinates and remembers them as the user's location.
    ///
    /// The geocoder payload is returned as is. Its `display_name`, if any, becomes the
    /// location name.
    ///
    /// # Errors
    /// - `HTTPError` for non-finite coordinates and upstream failures.
    pub async fn fetch_location(&self, lat: f64, lon: f64) -> Result<serde_json::Value, HTTPError> {
        self.run(LOCATION, "Failed to fetch geolocation", async {
            let at = coordinate(lat, lon)?;
            let payload = self.k.sky().reverse_geocode(at).await?;
            let location = self.k.location();
            location.set_coordinates(at);
            if let Some(name) = display_name(&payload) {
                location.set_location_name(name);
            }
            Ok::<_, HTTPError>(payload)
        })
        .await
    }

    /// # Errors
    /// - `HTTPError` for upstream failures.
    pub async fn fetch_iss(&self) -> Result<IssPosition, HTTPError> {
        self.run(ISS, "Failed to retrieve ISS location", self.k.sky().iss_position()).await
    }
}
