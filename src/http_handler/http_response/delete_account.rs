use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};
use crate::http_handler::transport::RawResponse;

/// Response type for the /api/protected/delete endpoint.
///
/// A successful deletion may come with an empty body, only the status code is relevant.
pub struct DeleteAccountResponse {}

impl HTTPResponseType for DeleteAccountResponse {
    type ParsedResponseType = ();

    fn read_response(response: RawResponse) -> Result<Self::ParsedResponseType, ResponseError> {
        Self::unwrap_return_code(response)?;
        Ok(())
    }
}
