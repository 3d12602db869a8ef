//! Error types for the name resolution client.
//!
//! Domain-specific errors live in submodules (configuration, portal API) and are aggregated
//! into the crate-wide [`Error`] through `thiserror`'s `#[from]` conversions, so any layer can
//! propagate them with `?`.

pub mod api;
pub mod config;

use thiserror::Error;

use crate::error::{api::ApiError, config::ConfigError};

/// Main error type for the crate.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Portal API errors (HTTP status failures, rejected requests, bad credentials)
/// - Transport errors from the HTTP client (connection, timeout, malformed body)
/// - Parse errors for user supplied values
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// The portal answered but refused or failed the request.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// HTTP client error (connection failure, timeout, body decoding).
    #[error(transparent)]
    RequestError(#[from] reqwest::Error),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0}")]
    ParseError(String),
}
