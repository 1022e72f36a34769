use super::math::distance_meters;
use strum_macros::Display;

/// A validated pair of geographic degrees.
///
/// Both components are guaranteed to be finite, the range is not restricted because the
/// upstream services accept and wrap any value.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    #[serde(rename = "lat")]
    latitude: f64,
    #[serde(rename = "lon")]
    longitude: f64,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    NonFiniteLatitude,
    NonFiniteLongitude,
}

impl std::error::Error for CoordinateError {}

impl GeoCoordinate {
    /// Creates a new `GeoCoordinate` after checking both values.
    ///
    /// # Errors
    /// - `CoordinateError` if latitude or longitude is `NaN` or infinite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() {
            return Err(CoordinateError::NonFiniteLatitude);
        }
        if !longitude.is_finite() {
            return Err(CoordinateError::NonFiniteLongitude);
        }
        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 { self.latitude }
    pub fn longitude(&self) -> f64 { self.longitude }

    /// Great-circle distance to `other` in meters.
    pub fn distance_to(&self, other: &GeoCoordinate) -> f64 {
        distance_meters(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Query parameters in the `lat`/`lon` shape used by the backend proxy.
    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("lat", self.latitude.to_string()), ("lon", self.longitude.to_string())]
    }
}
