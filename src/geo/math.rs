use crate::{event, warn};

/// Mean earth radius in meters used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculates the great-circle distance between two points given in degrees.
///
/// # Arguments
/// - `lat1`, `lon1`: Latitude and longitude of the first point.
/// - `lat2`, `lon2`: Latitude and longitude of the second point.
///
/// # Returns
/// - The distance in meters, or `f64::NAN` if any of the inputs is not finite.
///   Callers have to check the result with `is_nan()` before using it.
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    event!("Calculating distance between ({lat1}, {lon1}) and ({lat2}, {lon2})");
    if ![lat1, lon1, lat2, lon2].iter().all(|v| v.is_finite()) {
        warn!("Invalid coordinates for distance: {lat1}, {lon1}, {lat2}, {lon2}");
        return f64::NAN;
    }

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_M * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}
