use thiserror::Error;

/// Failures reported by the portal itself, as opposed to transport failures.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx HTTP status without a more specific mapping.
    #[error("Request to {path} failed with status {status}: {message}")]
    Status {
        path: String,
        status: u16,
        message: String,
    },
    /// The response envelope carried a non-success business code.
    #[error("Portal rejected request to {path} with code {code}: {msg}")]
    Rejected { path: String, code: i64, msg: String },
    /// The response body could not be decoded.
    #[error("Malformed response body from {path}: {reason}")]
    MalformedBody { path: String, reason: String },
    /// Missing, expired or insufficient bearer token (HTTP 401/403).
    #[error("Portal denied access to {path}: {msg}")]
    Unauthorized { path: String, msg: String },
}
