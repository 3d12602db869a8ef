//! Batched ID-to-name resolution for an EVE Online alliance & corporation portal.
//!
//! Views across the portal display ship types, solar systems, characters, corporations and
//! alliances by numeric ID. This crate turns those IDs into names with as few requests as
//! possible:
//!
//! - [`NameResolver`]: session-scoped cache that deduplicates IDs and resolves the missing
//!   ones in one batch call
//! - [`PortalClient`]: HTTP client for the portal's REST API, the default name lookup
//! - [`humanize_number`]: compact rendering of ISK and point totals
//! - `client` (feature `web`): Dioxus hooks and components on top of the resolver

pub mod api;
#[cfg(feature = "web")]
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;

pub use api::PortalClient;
pub use error::Error;
pub use model::names::{EntityId, IdSpec, NameCategory, NameRequest};
pub use service::names::NameResolver;
pub use util::humanize_number;
