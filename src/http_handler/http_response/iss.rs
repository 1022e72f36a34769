use crate::geo::{CoordinateError, GeoCoordinate};
use crate::http_handler::LooseNumber;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Ground point of the International Space Station.
///
/// Open Notify sends both values as numeric strings.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct IssPosition {
    latitude: LooseNumber,
    longitude: LooseNumber,
}

impl SerdeJSONBodyHTTPResponseType for IssPosition {}

impl IssPosition {
    /// Validated coordinate of the ground point.
    ///
    /// # Errors
    /// - `CoordinateError` if the upstream sent text that is not a number.
    pub fn coordinate(&self) -> Result<GeoCoordinate, CoordinateError> {
        GeoCoordinate::new(self.latitude.value(), self.longitude.value())
    }
}

/// Response type for the Open Notify /iss-now.json endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct IssNowResponse {
    iss_position: IssPosition,
}

impl SerdeJSONBodyHTTPResponseType for IssNowResponse {}

impl IssNowResponse {
    pub fn into_position(self) -> IssPosition { self.iss_position }
}
