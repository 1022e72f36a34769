use crate::geo::GeoCoordinate;
use crate::sky_source::AstronomyCredentials;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use strum_macros::{Display, EnumString};

/// Where weather, sky and location data is fetched from.
#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq, Default)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SkySourceKind {
    /// The `/api/*` routes of the backend proxy.
    #[default]
    Proxy,
    /// The third-party services, queried from this process.
    Direct,
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber { var: &'static str, value: String },
    UnknownSkySource(String),
    /// Only one of latitude and longitude was given.
    IncompleteLocation,
    InvalidLocation,
}

impl std::error::Error for ConfigError {}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    /// File backing the durable store, in-memory storage if absent.
    pub store_path: Option<PathBuf>,
    pub notify_ttl: Duration,
    pub sky_source: SkySourceKind,
    /// Coordinates the binary reports on.
    pub location: Option<GeoCoordinate>,
    pub forecast_url: String,
    pub astronomy_url: String,
    pub geocoder_url: String,
    pub iss_url: String,
    pub astronomy: Option<AstronomyCredentials>,
}

impl Config {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5000";
    pub const DEFAULT_FORECAST_URL: &'static str = "https://api.open-meteo.com";
    pub const DEFAULT_ASTRONOMY_URL: &'static str = "https://api.astronomyapi.com";
    pub const DEFAULT_GEOCODER_URL: &'static str = "https://nominatim.openstreetmap.org";
    pub const DEFAULT_ISS_URL: &'static str = "http://api.open-notify.org";
    const DEFAULT_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_NOTIFY_TTL_MS: u64 = 5000;

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// - `ConfigError` if a variable is set to something unusable.
    pub fn from_env() -> Result<Self, ConfigError> { Self::from_lookup(|var| std::env::var(var).ok()) }

    /// Reads the configuration through `lookup`. Empty values count as unset.
    ///
    /// # Errors
    /// - `ConfigError` if a variable is set to something unusable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where F: Fn(&str) -> Option<String> {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let url_or = |var: &str, default: &str| get(var).unwrap_or_else(|| default.to_string());

        let sky_source = match get("ABOVE_YOU_SKY_SOURCE") {
            Some(raw) => SkySourceKind::from_str(&raw).map_err(|_| ConfigError::UnknownSkySource(raw))?,
            None => SkySourceKind::default(),
        };
        let location = match (get("ABOVE_YOU_LAT"), get("ABOVE_YOU_LON")) {
            (Some(lat), Some(lon)) => {
                let lat = parse_number::<f64>("ABOVE_YOU_LAT", &lat)?;
                let lon = parse_number::<f64>("ABOVE_YOU_LON", &lon)?;
                Some(GeoCoordinate::new(lat, lon).map_err(|_| ConfigError::InvalidLocation)?)
            }
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteLocation),
        };
        let astronomy = match (get("ASTRONOMY_APP_ID"), get("ASTRONOMY_API_KEY")) {
            (Some(app_id), Some(app_secret)) => Some(AstronomyCredentials { app_id, app_secret }),
            _ => None,
        };

        Ok(Self {
            base_url: url_or("ABOVE_YOU_BASE_URL", Self::DEFAULT_BASE_URL),
            timeout: Duration::from_secs(
                get("ABOVE_YOU_TIMEOUT_SECS")
                    .map(|v| parse_number("ABOVE_YOU_TIMEOUT_SECS", &v))
                    .transpose()?
                    .unwrap_or(Self::DEFAULT_TIMEOUT_SECS),
            ),
            store_path: get("ABOVE_YOU_STORE_PATH").map(PathBuf::from),
            notify_ttl: Duration::from_millis(
                get("ABOVE_YOU_NOTIFY_TTL_MS")
                    .map(|v| parse_number("ABOVE_YOU_NOTIFY_TTL_MS", &v))
                    .transpose()?
                    .unwrap_or(Self::DEFAULT_NOTIFY_TTL_MS),
            ),
            sky_source,
            location,
            forecast_url: url_or("ABOVE_YOU_FORECAST_URL", Self::DEFAULT_FORECAST_URL),
            astronomy_url: url_or("ABOVE_YOU_ASTRONOMY_URL", Self::DEFAULT_ASTRONOMY_URL),
            geocoder_url: url_or("ABOVE_YOU_GEOCODER_URL", Self::DEFAULT_GEOCODER_URL),
            iss_url: url_or("ABOVE_YOU_ISS_URL", Self::DEFAULT_ISS_URL),
            astronomy,
        })
    }
}

fn parse_number<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber { var, value: value.to_string() })
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError, SkySourceKind};
    use std::collections::HashMap;
    use std::time::Duration;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.notify_ttl, Duration::from_millis(5000));
        assert_eq!(config.sky_source, SkySourceKind::Proxy);
        assert!(config.store_path.is_none());
        assert!(config.location.is_none());
        assert!(config.astronomy.is_none());
        assert_eq!(config.iss_url, Config::DEFAULT_ISS_URL);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("ABOVE_YOU_BASE_URL", "https://above.example"),
            ("ABOVE_YOU_TIMEOUT_SECS", "12"),
            ("ABOVE_YOU_NOTIFY_TTL_MS", "250"),
            ("ABOVE_YOU_SKY_SOURCE", "Direct"),
            ("ABOVE_YOU_LAT", "52.52"),
            ("ABOVE_YOU_LON", " 13.405 "),
            ("ABOVE_YOU_STORE_PATH", "/tmp/above.json"),
            ("ASTRONOMY_APP_ID", "id"),
            ("ASTRONOMY_API_KEY", "key"),
        ])
        .unwrap();
        assert_eq!(config.base_url, "https://above.example");
        assert_eq!(config.timeout, Duration::from_secs(12));
        assert_eq!(config.notify_ttl, Duration::from_millis(250));
        assert_eq!(config.sky_source, SkySourceKind::Direct);
        let location = config.location.unwrap();
        assert!((location.longitude() - 13.405).abs() < f64::EPSILON);
        assert_eq!(config.astronomy.map(|c| c.app_id).as_deref(), Some("id"));
        assert_eq!(config.store_path.unwrap().to_str(), Some("/tmp/above.json"));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config_from(&[("ABOVE_YOU_TIMEOUT_SECS", "soon")]).unwrap_err(),
            ConfigError::InvalidNumber { var: "ABOVE_YOU_TIMEOUT_SECS", value: "soon".to_string() }
        );
        assert_eq!(
            config_from(&[("ABOVE_YOU_SKY_SOURCE", "satellite")]).unwrap_err(),
            ConfigError::UnknownSkySource("satellite".to_string())
        );
        assert_eq!(config_from(&[("ABOVE_YOU_LAT", "1.0")]).unwrap_err(), ConfigError::IncompleteLocation);
        assert_eq!(
            config_from(&[("ABOVE_YOU_LAT", "NaN"), ("ABOVE_YOU_LON", "1.0")]).unwrap_err(),
            ConfigError::InvalidLocation
        );
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config = config_from(&[("ABOVE_YOU_BASE_URL", ""), ("ASTRONOMY_APP_ID", "id")]).unwrap();
        assert_eq!(config.base_url, Config::DEFAULT_BASE_URL);
        assert!(config.astronomy.is_none());
    }
}
