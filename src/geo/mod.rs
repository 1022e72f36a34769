mod coordinate;
mod math;

pub use coordinate::{CoordinateError, GeoCoordinate};
pub use math::{EARTH_RADIUS_M, distance_meters};
