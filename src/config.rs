use std::time::Duration;

use dioxus_logger::tracing::Level;
use reqwest::Url;

use crate::{error::config::ConfigError, service::names::locale::DEFAULT_LANGUAGE};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub static DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct Config {
    pub portal_url: Url,
    pub portal_token: Option<String>,
    pub language: String,
    pub request_timeout: Duration,
    pub log_level: Level,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let portal_url = var("PORTAL_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("PORTAL_URL".to_string()))?;
        let portal_url = parse_portal_url(&portal_url)?;

        let request_timeout = match var("PORTAL_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                Ok(_) => return Err(invalid("PORTAL_TIMEOUT_SECS", "must be greater than 0")),
                Err(e) => return Err(invalid("PORTAL_TIMEOUT_SECS", e)),
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let log_level = match var("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|e| invalid("LOG_LEVEL", e))?,
            None => Level::INFO,
        };

        Ok(Self {
            portal_url,
            portal_token: var("PORTAL_TOKEN"),
            language: var("PORTAL_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            request_timeout,
            log_level,
            user_agent: var("USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

fn parse_portal_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|e| invalid("PORTAL_URL", e))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(
            "PORTAL_URL",
            format!("unsupported scheme `{}`, expected http or https", scheme),
        )),
    }
}

fn invalid(var: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: reason.to_string(),
    }
}
