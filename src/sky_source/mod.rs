//! Where weather, sky and location data come from.
//!
//! The viewer normally talks to its backend proxy ([`ProxySource`]). The [`Aggregator`] queries
//! the third-party services directly and does the proxy's work in process.

mod aggregator;
mod proxy;

use crate::celestial::SkyView;
use crate::geo::GeoCoordinate;
use crate::http_handler::HTTPError;
use crate::http_handler::http_response::iss::IssPosition;
use crate::weather::WeatherReport;
use async_trait::async_trait;

pub use aggregator::{Aggregator, AstronomyCredentials, Upstreams};
pub use proxy::ProxySource;

/// Provider of the data behind the weather, celestial, location and ISS modules.
///
/// Every method issues exactly one upstream call.
#[async_trait]
pub trait SkySource: Send + Sync {
    async fn weather(&self, at: GeoCoordinate) -> Result<WeatherReport, HTTPError>;
    /// Bodies above and below the horizon at `at`, right now.
    async fn celestial(&self, at: GeoCoordinate) -> Result<SkyView, HTTPError>;
    /// The geocoder's payload, passed through unchanged.
    async fn reverse_geocode(&self, at: GeoCoordinate) -> Result<serde_json::Value, HTTPError>;
    async fn iss_position(&self) -> Result<IssPosition, HTTPError>;
}
