//! Data transfer models shared by the portal client, the resolver and the UI hooks.

pub mod api;
pub mod names;
