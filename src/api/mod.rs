//! HTTP client for the portal's REST API.
//!
//! [`PortalClient`] owns the connection settings (base URL, bearer token, user agent,
//! timeout) and exposes endpoint groups the way the ESI client does, e.g.
//! `client.sde().names(&request)`. Every response is unwrapped from the portal's
//! `{code, msg, data}` envelope before it reaches the caller.

pub mod sde;

use std::time::Duration;

use reqwest::{Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::{Config, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT},
    error::{api::ApiError, Error},
    model::api::ApiResponse,
};

#[derive(Clone)]
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for PortalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

impl PortalClient {
    pub fn builder(base_url: Url) -> PortalClientBuilder {
        PortalClientBuilder {
            base_url,
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Builds a client from the connection settings in `config`.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let mut builder = Self::builder(config.portal_url.clone())
            .user_agent(&config.user_agent)
            .timeout(config.request_timeout);

        if let Some(token) = &config.portal_token {
            builder = builder.token(token);
        }

        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POSTs `body` as JSON to `path` and unwraps the response envelope.
    ///
    /// # Returns
    /// - `Ok(Some(T))` - The portal accepted the request and returned data
    /// - `Ok(None)` - The portal accepted the request with `data: null`
    /// - `Err(Error::ApiError)` - Non-2xx status, rejected request or malformed body
    /// - `Err(Error::RequestError)` - The request could not be sent or read
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.http.post(self.endpoint(path)).json(body);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        #[cfg(target_arch = "wasm32")]
        {
            request = request.fetch_credentials_include();
        }

        let response = request.send().await?;

        read_envelope(path, response).await
    }
}

async fn read_envelope<T: DeserializeOwned>(
    path: &str,
    response: Response,
) -> Result<Option<T>, Error> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = error_message(status, &body);

        return Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized {
                path: path.to_string(),
                msg: message,
            },
            _ => ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                message,
            },
        }
        .into());
    }

    let envelope: ApiResponse<T> =
        serde_json::from_str(&body).map_err(|e| ApiError::MalformedBody {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

    if !envelope.is_ok() {
        return Err(ApiError::Rejected {
            path: path.to_string(),
            code: envelope.code,
            msg: envelope.msg,
        }
        .into());
    }

    Ok(envelope.data)
}

/// Best description of a failed response: the envelope message, the raw body, or the
/// status' canonical reason, whichever is available first.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde::de::IgnoredAny>>(body) {
        if !envelope.msg.is_empty() {
            return envelope.msg;
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

pub struct PortalClientBuilder {
    base_url: Url,
    token: Option<String>,
    user_agent: String,
    timeout: Duration,
}

impl PortalClientBuilder {
    /// Bearer token sent with every request.
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Ignored in the browser, which always sends its own user agent.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Total time allowed per request. Ignored in the browser.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<PortalClient, Error> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.user_agent(&self.user_agent).timeout(self.timeout);

        #[cfg(target_arch = "wasm32")]
        let _ = (&self.user_agent, self.timeout);

        Ok(PortalClient {
            http: builder.build()?,
            base_url: self.base_url.as_str().trim_end_matches('/').to_string(),
            token: self.token,
        })
    }
}
