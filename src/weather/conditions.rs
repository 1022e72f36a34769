use super::WeatherReport;
use strum_macros::{Display, EnumIter};

/// Coarse wind classification shown next to the wind speed.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq)]
pub enum WindLabel {
    Calm,
    Moderate,
    Strong,
}

impl WindLabel {
    /// Upper bound (exclusive) of calm wind in km/h.
    const CALM_BELOW: f64 = 10.0;
    /// Upper bound (exclusive) of moderate wind in km/h.
    const MODERATE_BELOW: f64 = 30.0;

    pub fn from_speed(speed_kmh: f64) -> Self {
        if speed_kmh < Self::CALM_BELOW {
            WindLabel::Calm
        } else if speed_kmh < Self::MODERATE_BELOW {
            WindLabel::Moderate
        } else {
            WindLabel::Strong
        }
    }
}

/// Coarse temperature classification.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureLabel {
    Cold,
    Mild,
    Hot,
}

impl TemperatureLabel {
    const COLD_AT_MOST: f64 = 5.0;
    const HOT_AT_LEAST: f64 = 25.0;

    pub fn from_celsius(temp: f64) -> Self {
        if temp <= Self::COLD_AT_MOST {
            TemperatureLabel::Cold
        } else if temp >= Self::HOT_AT_LEAST {
            TemperatureLabel::Hot
        } else {
            TemperatureLabel::Mild
        }
    }
}

impl WeatherReport {
    pub fn wind_label(&self) -> WindLabel { WindLabel::from_speed(self.windspeed()) }
    pub fn temperature_label(&self) -> TemperatureLabel { TemperatureLabel::from_celsius(self.temperature()) }
}

#[cfg(test)]
mod tests {
    use super::{TemperatureLabel, WindLabel};
    use strum::IntoEnumIterator;

    #[test]
    fn test_wind_label_boundaries() {
        assert_eq!(WindLabel::from_speed(0.0), WindLabel::Calm);
        assert_eq!(WindLabel::from_speed(9.99), WindLabel::Calm);
        assert_eq!(WindLabel::from_speed(10.0), WindLabel::Moderate);
        assert_eq!(WindLabel::from_speed(29.9), WindLabel::Moderate);
        assert_eq!(WindLabel::from_speed(30.0), WindLabel::Strong);
    }

    #[test]
    fn test_temperature_label_boundaries() {
        assert_eq!(TemperatureLabel::from_celsius(-3.0), TemperatureLabel::Cold);
        assert_eq!(TemperatureLabel::from_celsius(5.0), TemperatureLabel::Cold);
        assert_eq!(TemperatureLabel::from_celsius(5.1), TemperatureLabel::Mild);
        assert_eq!(TemperatureLabel::from_celsius(24.9), TemperatureLabel::Mild);
        assert_eq!(TemperatureLabel::from_celsius(25.0), TemperatureLabel::Hot);
    }

    #[test]
    fn test_labels_display() {
        let wind: Vec<String> = WindLabel::iter().map(|l| l.to_string()).collect();
        assert_eq!(wind, ["Calm", "Moderate", "Strong"]);
        let temp: Vec<String> = TemperatureLabel::iter().map(|l| l.to_string()).collect();
        assert_eq!(temp, ["Cold", "Mild", "Hot"]);
    }

    #[test]
    fn test_report_labels() {
        let report: super::WeatherReport = serde_json::from_value(serde_json::json!({
            "temperature": 27.3, "windspeed": 12.0, "winddirection": 250.0,
            "weathercode": 1, "time": "2025-06-01T14:00"
        }))
        .unwrap();
        assert_eq!(report.temperature_label(), TemperatureLabel::Hot);
        assert_eq!(report.wind_label(), WindLabel::Moderate);
    }
}
