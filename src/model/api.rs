use serde::{Deserialize, Serialize};

/// Business status code the portal uses for a successful response.
pub const CODE_OK: i64 = 200;

/// The envelope the portal wraps around every API response body
///
/// Failures are reported through `code` and `msg` with `data` set to `null`, frequently
/// under an HTTP 200 status, so the HTTP status alone is not enough to detect them.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Business status code, `200` on success
    pub code: i64,
    /// Human readable status message
    #[serde(default)]
    pub msg: String,
    /// The payload, absent on failure
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        self.code == CODE_OK
    }
}
