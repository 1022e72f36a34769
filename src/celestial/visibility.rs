use super::body_row::BodyRow;
use itertools::{Either, Itertools};
use serde::{Deserialize, Serialize};

/// Apparent brightness of a body, `"N/A"` on the wire when the upstream did not report one.
///
/// Values that are not numbers are kept as they were received.
#[derive(Debug, Clone, PartialEq)]
pub enum Magnitude {
    Known(f64),
    Other(serde_json::Value),
    Unknown,
}

impl Magnitude {
    const UNKNOWN_SENTINEL: &'static str = "N/A";

    fn from_reported(value: Option<&serde_json::Value>) -> Self {
        match value {
            None | Some(serde_json::Value::Null) => Magnitude::Unknown,
            Some(v) => v.as_f64().map_or_else(|| Magnitude::Other(v.clone()), Magnitude::Known),
        }
    }
}

impl serde::Serialize for Magnitude {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Magnitude::Known(m) => serializer.serialize_f64(*m),
            Magnitude::Other(v) => v.serialize(serializer),
            Magnitude::Unknown => serializer.serialize_str(Self::UNKNOWN_SENTINEL),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Magnitude {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some(Self::UNKNOWN_SENTINEL) => Magnitude::Unknown,
            _ => Self::from_reported(Some(&value)),
        })
    }
}

/// A body that is above the horizon.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct CelestialRecord {
    name: String,
    altitude: f64,
    azimuth: f64,
    #[serde(default = "unknown_magnitude")]
    magnitude: Magnitude,
}

fn unknown_magnitude() -> Magnitude { Magnitude::Unknown }

impl CelestialRecord {
    pub fn name(&self) -> &str { &self.name }
    pub fn altitude(&self) -> f64 { self.altitude }
    pub fn azimuth(&self) -> f64 { self.azimuth }
    pub fn magnitude(&self) -> &Magnitude { &self.magnitude }
}

/// A body that was dropped, with the reason shown to the user.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FilteredBody {
    name: String,
    reason: String,
}

impl FilteredBody {
    pub fn name(&self) -> &str { &self.name }
    pub fn reason(&self) -> &str { &self.reason }
}

/// The visible/filtered split of a sky snapshot, in the backend's wire shape.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SkyView {
    #[serde(default)]
    visible: Vec<CelestialRecord>,
    #[serde(default, rename = "filteredOut")]
    filtered_out: Vec<FilteredBody>,
}

impl SkyView {
    pub fn visible(&self) -> &[CelestialRecord] { &self.visible }
    pub fn filtered_out(&self) -> &[FilteredBody] { &self.filtered_out }
    pub fn len(&self) -> usize { self.visible.len() + self.filtered_out.len() }
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Looks up a visible body by name.
    pub fn find_visible(&self, name: &str) -> Option<&CelestialRecord> {
        self.visible.iter().find(|r| r.name == name)
    }
}

/// Splits raw body rows into bodies above the horizon and bodies that are filtered out.
///
/// A row is visible iff the first cell has a horizontal position with an altitude strictly
/// greater than zero degrees. The relative order of the input is preserved in both outputs.
/// Malformed rows are never an error, they end up in `filtered_out` with a reason.
pub fn partition(rows: &[BodyRow]) -> SkyView {
    let (visible, filtered_out) = rows.iter().partition_map(|row| match classify(row) {
        Ok(record) => Either::Left(record),
        Err(filtered) => Either::Right(filtered),
    });
    SkyView { visible, filtered_out }
}

fn classify(row: &BodyRow) -> Result<CelestialRecord, FilteredBody> {
    let name = row.name().to_string();
    let Some(position) = row.first_horizontal() else {
        return Err(FilteredBody { name, reason: String::from("No horizontal position") });
    };
    let altitude = position.altitude().value();
    // NaN compares false and lands below the horizon
    if altitude > 0.0 {
        Ok(CelestialRecord {
            name,
            altitude,
            azimuth: position.azimuth().value(),
            magnitude: Magnitude::from_reported(row.first_magnitude()),
        })
    } else {
        Err(FilteredBody {
            name,
            reason: format!("Below horizon (alt: {})", position.altitude().raw()),
        })
    }
}
