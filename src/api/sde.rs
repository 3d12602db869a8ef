//! Static data export (SDE) endpoints.

use async_trait::async_trait;

use crate::{
    api::PortalClient,
    error::Error,
    model::names::{LookupRequest, NamesResponse},
    service::names::lookup::NameLookup,
};

pub static NAMES_PATH: &str = "/api/v1/sde/names";

pub struct SdeApi<'a> {
    client: &'a PortalClient,
}

impl PortalClient {
    pub fn sde(&self) -> SdeApi<'_> {
        SdeApi { client: self }
    }
}

impl SdeApi<'_> {
    /// Batch-resolves categorized IDs through the SDE translation tables and universe IDs
    /// through ESI `/universe/names`.
    ///
    /// IDs the portal has no name for are missing from the result; a `null` payload is
    /// returned as an empty response.
    pub async fn names(&self, request: &LookupRequest) -> Result<NamesResponse, Error> {
        let names = self
            .client
            .post::<_, NamesResponse>(NAMES_PATH, request)
            .await?;

        Ok(names.unwrap_or_default())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl NameLookup for PortalClient {
    async fn lookup_names(&self, request: &LookupRequest) -> Result<NamesResponse, Error> {
        self.sde().names(request).await
    }
}
