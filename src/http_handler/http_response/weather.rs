use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Current weather at a location, in the shape of the Open-Meteo `current_weather` block.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Air temperature in °C.
    temperature: f64,
    /// Wind speed in km/h.
    windspeed: f64,
    /// Wind direction in degrees.
    winddirection: f64,
    /// WMO weather interpretation code.
    weathercode: i32,
    /// Local ISO-8601 timestamp of the measurement.
    time: String,
}

impl SerdeJSONBodyHTTPResponseType for WeatherReport {}

impl WeatherReport {
    pub fn temperature(&self) -> f64 { self.temperature }
    pub fn windspeed(&self) -> f64 { self.windspeed }
    pub fn winddirection(&self) -> f64 { self.winddirection }
    pub fn weathercode(&self) -> i32 { self.weathercode }
    pub fn time(&self) -> &str { &self.time }
}

/// Response type for the Open-Meteo /v1/forecast endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<WeatherReport>,
}

impl SerdeJSONBodyHTTPResponseType for ForecastResponse {}

impl ForecastResponse {
    pub fn into_current_weather(self) -> Option<WeatherReport> { self.current_weather }
}
