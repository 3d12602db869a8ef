//! Business logic layered over the portal client.

pub mod names;
