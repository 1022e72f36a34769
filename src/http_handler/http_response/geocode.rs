use crate::http_handler::http_response::response_common::{
    HTTPResponseType, JSONBodyHTTPResponseType, ResponseError,
};
use crate::http_handler::transport::RawResponse;

/// Response type for reverse-geocoding lookups.
///
/// The payload is passed through unmodified, its schema belongs to the geocoder.
pub struct GeocodeResponse {}

impl JSONBodyHTTPResponseType for GeocodeResponse {}

impl HTTPResponseType for GeocodeResponse {
    type ParsedResponseType = serde_json::Value;

    fn read_response(response: RawResponse) -> Result<Self::ParsedResponseType, ResponseError> {
        let response = Self::unwrap_return_code(response)?;
        Self::parse_json_body(response)
    }
}

/// The human-readable place name of a Nominatim-style payload, if present.
pub fn display_name(payload: &serde_json::Value) -> Option<&str> {
    payload.get("display_name").and_then(serde_json::Value::as_str)
}
