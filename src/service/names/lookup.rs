use async_trait::async_trait;

use crate::{
    error::Error,
    model::names::{LookupRequest, NamesResponse},
};

/// Remote batch endpoint mapping categorized ID lists to display names.
///
/// Implementations report every failure (transport, HTTP status, rejected request) as an
/// [`Error`]; IDs the service has no name for are simply absent from the response.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait NameLookup {
    async fn lookup_names(&self, request: &LookupRequest) -> Result<NamesResponse, Error>;
}
