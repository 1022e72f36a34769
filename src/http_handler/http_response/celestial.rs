use crate::celestial::{BodyRow, SkyView, lenient_elements, partition};
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use serde::Deserialize;
use serde::de::Error;

/// Response type for the /api/celestial endpoint.
///
/// Depending on the deployment the proxy either partitions the bodies itself or hands the
/// AstronomyAPI table through unchanged. The variant is chosen by the top-level keys. A
/// payload with neither `data` nor `visible`/`filteredOut` is rejected.
#[derive(Debug)]
pub enum CelestialPayload {
    Raw(BodyPositionsResponse),
    Partitioned(SkyView),
}

impl<'de> Deserialize<'de> for CelestialPayload {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let is_raw = value.get("data").is_some();
        let is_partitioned = value.get("visible").is_some() || value.get("filteredOut").is_some();
        if is_raw {
            BodyPositionsResponse::deserialize(value).map(CelestialPayload::Raw).map_err(D::Error::custom)
        } else if is_partitioned {
            SkyView::deserialize(value).map(CelestialPayload::Partitioned).map_err(D::Error::custom)
        } else {
            Err(D::Error::custom("expected a body table under `data` or a `visible`/`filteredOut` split"))
        }
    }
}

impl SerdeJSONBodyHTTPResponseType for CelestialPayload {}

impl CelestialPayload {
    /// Normalizes both payload variants into a `SkyView`.
    pub fn into_sky_view(self) -> SkyView {
        match self {
            CelestialPayload::Partitioned(view) => view,
            CelestialPayload::Raw(raw) => partition(raw.rows()),
        }
    }
}

/// Response type for the AstronomyAPI /api/v2/bodies/positions endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct BodyPositionsResponse {
    data: BodyPositionsData,
}

#[derive(serde::Deserialize, Debug)]
struct BodyPositionsData {
    table: BodyPositionsTable,
}

#[derive(serde::Deserialize, Debug)]
struct BodyPositionsTable {
    #[serde(default, deserialize_with = "lenient_elements")]
    rows: Vec<BodyRow>,
}

impl SerdeJSONBodyHTTPResponseType for BodyPositionsResponse {}

impl BodyPositionsResponse {
    pub fn rows(&self) -> &[BodyRow] { &self.data.table.rows }
}
