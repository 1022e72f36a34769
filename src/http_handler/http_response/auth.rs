use super::super::http_handler_common::UserRecord;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /api/auth/login and /api/auth/register endpoints.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct AuthResponse {
    /// Bearer token for the protected endpoints.
    token: String,
    /// The authenticated user.
    user: UserRecord,
}

impl SerdeJSONBodyHTTPResponseType for AuthResponse {}

impl AuthResponse {
    pub fn token(&self) -> &str { &self.token }
    pub fn user(&self) -> &UserRecord { &self.user }
    pub fn into_parts(self) -> (UserRecord, String) { (self.user, self.token) }
}
