//! Asynchronous client facade.
//!
//! Thin glue: every call resolves a request, performs one GET, maps the
//! HTTP status and hands the decoded body to the normalizer. The blocking
//! client routes through the identical pipeline.

use std::time::Duration;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{ApiVersion, ImageType, JokeType, Plan, WaifuType, DEFAULT_VERSION};
use crate::request::{resolve, AiOptions, Operation, RequestSpec};
use crate::response;
use crate::session::{HttpSession, SessionConfig, BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::types::{AIResponse, CovidData, Joke, Waifu, Weather};

/// Everything needed to construct a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub version: ApiVersion,
    pub user_agent: String,
    pub timeout: Duration,
    /// Override for the API base URL; mainly useful against a mock server.
    pub base_url: String,
    /// When false, mutes the `tracing` advisories the client emits.
    pub warnings: bool,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            version: DEFAULT_VERSION,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            base_url: BASE_URL.to_owned(),
            warnings: true,
        }
    }

    pub fn version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Convert the client configuration into a session configuration.
    pub(crate) fn session_config(&self) -> SessionConfig {
        SessionConfig {
            api_key: self.api_key.clone(),
            user_agent: self.user_agent.clone(),
            timeout: self.timeout,
            base_url: self.base_url.clone(),
        }
    }

    pub(crate) fn emit_advisories(&self) {
        if self.warnings && self.version < DEFAULT_VERSION {
            tracing::warn!(
                "API version {} is outdated; migrate to version {} as soon as possible",
                self.version,
                ApiVersion::V5
            );
        }
    }
}

/// Asynchronous Random Stuff API client.
#[derive(Debug, Clone)]
pub struct Client {
    session: HttpSession,
    version: ApiVersion,
}

impl Client {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let session = HttpSession::new(&config.session_config())?;
        config.emit_advisories();
        Ok(Self {
            session,
            version: config.version,
        })
    }

    /// The API version this client was built for.
    pub fn version(&self) -> ApiVersion {
        self.version
    }

    async fn fetch(&self, operation: Operation<'_>, plan: Plan) -> Result<(RequestSpec, Value)> {
        let spec = resolve(&operation, self.version, plan)?;
        let url = self.session.endpoint(&spec.path)?;
        let http_response = self
            .session
            .client()
            .get(url)
            .query(&spec.query)
            .send()
            .await?;
        let status = http_response.status().as_u16();
        let text = http_response.text().await?;
        response::check_status(status, &text)?;
        let body = serde_json::from_str(&text)
            .map_err(|err| Error::MalformedResponse(format!("invalid JSON body: {err}")))?;
        Ok((spec, body))
    }

    /// Get an AI response to `message`.
    ///
    /// A paid `plan` routes the call through the plan's endpoint; `options`
    /// carries the version-specific overrides (server, language, names,
    /// session id).
    pub async fn get_ai_response(
        &self,
        message: &str,
        plan: Plan,
        options: &AiOptions,
    ) -> Result<AIResponse> {
        let (spec, body) = self
            .fetch(Operation::AiResponse { message, options }, plan)
            .await?;
        response::normalize_ai(self.version, &body, &spec)
    }

    /// Get a random joke of the given category.
    pub async fn get_joke(&self, kind: JokeType) -> Result<Joke> {
        let (_, body) = self.fetch(Operation::Joke { kind }, Plan::Free).await?;
        response::normalize_joke(&body)
    }

    /// Get a random joke, re-fetching until one marked safe comes back.
    pub async fn get_safe_joke(&self, kind: JokeType) -> Result<Joke> {
        loop {
            let joke = self.get_joke(kind).await?;
            if joke.safe {
                return Ok(joke);
            }
        }
    }

    /// Get a random image URL of the given category.
    pub async fn get_image(&self, kind: ImageType) -> Result<String> {
        let (_, body) = self.fetch(Operation::Image { kind }, Plan::Free).await?;
        response::normalize_image(&body)
    }

    /// Get a random waifu image. Requires a plan entitled to the endpoint.
    pub async fn get_waifu(&self, kind: WaifuType, plan: Plan) -> Result<Waifu> {
        let (_, body) = self.fetch(Operation::Waifu { kind }, plan).await?;
        response::normalize_waifu(&body)
    }

    /// Get the weather report for `city`.
    pub async fn get_weather(&self, city: &str) -> Result<Weather> {
        let (_, body) = self.fetch(Operation::Weather { city }, Plan::Free).await?;
        response::normalize_weather(&body)
    }

    /// Get COVID-19 statistics: world totals, or a single country's when
    /// `country` is given.
    pub async fn get_covid_stats(&self, country: Option<&str>) -> Result<CovidData> {
        let (_, body) = self.fetch(Operation::Covid { country }, Plan::Free).await?;
        response::normalize_covid(country.is_some(), &body)
    }
}
