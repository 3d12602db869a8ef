//! Test configuration constants for portal client setup.
//!
//! These values are placeholders, not real credentials.

/// User agent sent by test portal clients.
pub static TEST_USER_AGENT: &str = "EdenNames/1.0 (test@example.com)";

/// Bearer token configured on test portal clients and expected by authenticated mocks.
pub static TEST_TOKEN: &str = "test-portal-token";

/// Path of the portal's batch name lookup endpoint.
pub static NAMES_PATH: &str = "/api/v1/sde/names";
