//! What happens when a batch lookup fails.
//!
//! A failed lookup must never break the calling UI flow, so [`NameResolver::resolve`]
//! hands the error to a [`LookupFailurePolicy`] instead of returning it. The default
//! policy logs a warning and lets the caller continue with fallback names.
//!
//! [`NameResolver::resolve`]: super::NameResolver::resolve

use dioxus_logger::tracing;

use crate::{error::Error, model::names::LookupRequest};

pub trait LookupFailurePolicy: Send + Sync {
    /// Called once per failed batch lookup, after the pending state has been cleared.
    fn on_lookup_failure(&self, request: &LookupRequest, error: &Error);
}

/// Logs the failure as a warning and swallows it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAndContinue;

impl LookupFailurePolicy for LogAndContinue {
    fn on_lookup_failure(&self, request: &LookupRequest, error: &Error) {
        tracing::warn!(
            error = %error,
            id_count = request.id_count(),
            language = %request.language,
            "Failed to resolve entity names; unresolved IDs will use fallback names"
        );
    }
}
