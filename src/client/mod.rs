//! Dioxus integration for the name resolver.
//!
//! The application root provides one resolver per session with
//! [`use_name_resolver_provider`], usually reading its language from a [`SignalLocale`]
//! the settings views write to; views queue the IDs they display with
//! [`use_resolved_names`] and render them through [`EntityName`], which re-renders once a
//! batch lands in the cache.

#![allow(non_snake_case)]

pub mod components;
pub mod hooks;

pub use components::{EntityName, HumanizedNumber};
pub use hooks::{
    use_name_context, use_name_resolver, use_name_resolver_provider, use_resolved_names,
    use_signal_locale, NameContext, PortalNameResolver, SignalLocale,
};
