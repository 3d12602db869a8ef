mod locale;
mod name_resolver;

pub use locale::{use_signal_locale, SignalLocale};
pub use name_resolver::{
    use_name_context, use_name_resolver, use_name_resolver_provider, use_resolved_names,
    NameContext, PortalNameResolver,
};
