use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Url};

use crate::error::Result;

pub(crate) const BASE_URL: &str = "https://api.pgamerx.com";
pub(crate) const DEFAULT_USER_AGENT: &str = concat!("randomstuff-rs/", env!("CARGO_PKG_VERSION"));
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Wrapper around the configured HTTP client and base URL.
///
/// Owns every connection resource; result types never hold a reference
/// back here.
#[derive(Debug, Clone)]
pub struct HttpSession {
    client: Client,
    base: Url,
}

/// Minimal data required to build an HTTP session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub api_key: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub base_url: String,
}

impl SessionConfig {
    pub fn new(api_key: String, user_agent: String, timeout: Duration) -> Self {
        Self {
            api_key,
            user_agent,
            timeout,
            base_url: BASE_URL.to_owned(),
        }
    }
}

/// Default header set shared by the async and blocking clients: the
/// `x-api-key` credential, marked sensitive.
pub(crate) fn default_headers(config: &SessionConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let mut api_key = HeaderValue::from_str(&config.api_key)?;
    api_key.set_sensitive(true);
    headers.insert(api_key_header(), api_key);
    Ok(headers)
}

fn api_key_header() -> HeaderName {
    HeaderName::from_static("x-api-key")
}

impl HttpSession {
    /// Build a new HTTP session from the client configuration.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .default_headers(default_headers(config)?)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base: Url::parse(&config.base_url)?,
        })
    }

    /// Returns reference to the inner `reqwest::Client`.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Base API URL.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Joins a resolved request path onto the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }
}
