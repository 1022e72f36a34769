//! Raw body-position rows in the shape returned by the AstronomyAPI `bodies/positions` table.
//!
//! Every level is optional. A level that is missing, `null` or of the wrong type reads as
//! absent, so incomplete rows still deserialize and can be reported as filtered instead of
//! failing the whole payload.

use crate::http_handler::LooseNumber;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Deserializes `T`, falling back to its default if the value does not have the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Deserializes a sequence element by element, replacing malformed elements with defaults.
///
/// `null` reads as an empty sequence. Any other non-sequence is an error.
pub(crate) fn lenient_elements<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values.into_iter().map(|v| T::deserialize(v).unwrap_or_default()).collect())
}

/// Like [`lenient_elements`], but a non-sequence reads as an empty sequence.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(lenient_elements(value).unwrap_or_default())
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default)]
pub struct BodyRow {
    #[serde(default, deserialize_with = "lenient")]
    entry: BodyEntry,
    #[serde(default, deserialize_with = "lenient_seq")]
    cells: Vec<BodyCell>,
}

impl BodyRow {
    pub fn new(entry: BodyEntry, cells: Vec<BodyCell>) -> Self { Self { entry, cells } }
    pub fn name(&self) -> &str { self.entry.name.as_deref().unwrap_or(BodyEntry::UNKNOWN_NAME) }
    pub fn cells(&self) -> &[BodyCell] { &self.cells }

    /// Horizontal coordinates of the first cell, if the upstream provided them.
    pub fn first_horizontal(&self) -> Option<&HorizontalPosition> {
        self.cells.first()?.position.as_ref()?.horizontal.as_ref()
    }

    /// Magnitude of the first cell exactly as the upstream sent it.
    pub fn first_magnitude(&self) -> Option<&serde_json::Value> {
        self.cells.first()?.extra_info.as_ref()?.magnitude.as_ref()
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default)]
pub struct BodyEntry {
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
}

impl BodyEntry {
    const UNKNOWN_NAME: &'static str = "Unknown";

    pub fn named(name: impl Into<String>) -> Self { Self { name: Some(name.into()) } }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default)]
pub struct BodyCell {
    #[serde(default, deserialize_with = "lenient")]
    position: Option<BodyPosition>,
    #[serde(default, rename = "extraInfo", deserialize_with = "lenient")]
    extra_info: Option<ExtraInfo>,
}

impl BodyCell {
    pub fn new(position: Option<BodyPosition>, extra_info: Option<ExtraInfo>) -> Self {
        Self { position, extra_info }
    }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default)]
pub struct BodyPosition {
    #[serde(default, deserialize_with = "lenient")]
    horizontal: Option<HorizontalPosition>,
}

impl BodyPosition {
    pub fn horizontal(horizontal: HorizontalPosition) -> Self { Self { horizontal: Some(horizontal) } }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default)]
pub struct HorizontalPosition {
    #[serde(default, deserialize_with = "lenient")]
    altitude: HorizontalAngle,
    #[serde(default, deserialize_with = "lenient")]
    azimuth: HorizontalAngle,
}

impl HorizontalPosition {
    pub fn new(altitude: HorizontalAngle, azimuth: HorizontalAngle) -> Self { Self { altitude, azimuth } }
    pub fn altitude(&self) -> &HorizontalAngle { &self.altitude }
    pub fn azimuth(&self) -> &HorizontalAngle { &self.azimuth }
}

/// An angle in degrees. A missing value reads as `null` and therefore as `NaN`.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct HorizontalAngle {
    #[serde(default = "missing_degrees")]
    degrees: LooseNumber,
}

fn missing_degrees() -> LooseNumber { LooseNumber::Other(serde_json::Value::Null) }

impl Default for HorizontalAngle {
    fn default() -> Self { Self { degrees: missing_degrees() } }
}

impl HorizontalAngle {
    pub fn degrees(degrees: impl Into<LooseNumber>) -> Self { Self { degrees: degrees.into() } }
    pub fn value(&self) -> f64 { self.degrees.value() }
    pub fn raw(&self) -> String { self.degrees.raw() }
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default)]
pub struct ExtraInfo {
    #[serde(default)]
    magnitude: Option<serde_json::Value>,
}

impl ExtraInfo {
    pub fn with_magnitude(magnitude: impl Into<serde_json::Value>) -> Self {
        Self { magnitude: Some(magnitude.into()) }
    }
}
