use crate::{
    api::PortalClient,
    config::Config,
    error::Error,
    service::names::{locale::FixedLocale, NameResolver},
};

/// Build the portal client and a resolver requesting names in the configured language
pub fn build_name_resolver(config: &Config) -> Result<NameResolver<PortalClient>, Error> {
    let client = PortalClient::from_config(config)?;

    Ok(NameResolver::new(client).with_locale(FixedLocale::new(config.language.clone())))
}
