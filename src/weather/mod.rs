mod conditions;

pub use crate::http_handler::http_response::weather::WeatherReport;
pub use conditions::{TemperatureLabel, WindLabel};
