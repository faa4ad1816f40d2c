//! Blocking client variant.
//!
//! Routes through the same resolver, status mapping and normalizer as the
//! async [`crate::Client`]; only the transport call differs.

use reqwest::blocking::ClientBuilder;
use serde_json::Value;

use crate::client::ClientConfig;
use crate::error::{Error, Result};
use crate::model::{ApiVersion, ImageType, JokeType, Plan, WaifuType};
use crate::request::{resolve, AiOptions, Operation, RequestSpec};
use crate::response;
use crate::session;
use crate::types::{AIResponse, CovidData, Joke, Waifu, Weather};

/// Blocking Random Stuff API client.
#[derive(Debug)]
pub struct Client {
    client: reqwest::blocking::Client,
    base: reqwest::Url,
    version: ApiVersion,
}

impl Client {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let session_config = config.session_config();
        let client = ClientBuilder::new()
            .default_headers(session::default_headers(&session_config)?)
            .timeout(session_config.timeout)
            .user_agent(&session_config.user_agent)
            .build()?;
        config.emit_advisories();
        Ok(Self {
            client,
            base: reqwest::Url::parse(&session_config.base_url)?,
            version: config.version,
        })
    }

    /// The API version this client was built for.
    pub fn version(&self) -> ApiVersion {
        self.version
    }

    fn fetch(&self, operation: Operation<'_>, plan: Plan) -> Result<(RequestSpec, Value)> {
        let spec = resolve(&operation, self.version, plan)?;
        let url = self.base.join(&spec.path)?;
        let http_response = self.client.get(url).query(&spec.query).send()?;
        let status = http_response.status().as_u16();
        let text = http_response.text()?;
        response::check_status(status, &text)?;
        let body = serde_json::from_str(&text)
            .map_err(|err| Error::MalformedResponse(format!("invalid JSON body: {err}")))?;
        Ok((spec, body))
    }

    /// Blocking equivalent of [`crate::Client::get_ai_response`].
    pub fn get_ai_response(
        &self,
        message: &str,
        plan: Plan,
        options: &AiOptions,
    ) -> Result<AIResponse> {
        let (spec, body) = self.fetch(Operation::AiResponse { message, options }, plan)?;
        response::normalize_ai(self.version, &body, &spec)
    }

    /// Blocking equivalent of [`crate::Client::get_joke`].
    pub fn get_joke(&self, kind: JokeType) -> Result<Joke> {
        let (_, body) = self.fetch(Operation::Joke { kind }, Plan::Free)?;
        response::normalize_joke(&body)
    }

    /// Blocking equivalent of [`crate::Client::get_safe_joke`].
    pub fn get_safe_joke(&self, kind: JokeType) -> Result<Joke> {
        loop {
            let joke = self.get_joke(kind)?;
            if joke.safe {
                return Ok(joke);
            }
        }
    }

    /// Blocking equivalent of [`crate::Client::get_image`].
    pub fn get_image(&self, kind: ImageType) -> Result<String> {
        let (_, body) = self.fetch(Operation::Image { kind }, Plan::Free)?;
        response::normalize_image(&body)
    }

    /// Blocking equivalent of [`crate::Client::get_waifu`].
    pub fn get_waifu(&self, kind: WaifuType, plan: Plan) -> Result<Waifu> {
        let (_, body) = self.fetch(Operation::Waifu { kind }, plan)?;
        response::normalize_waifu(&body)
    }

    /// Blocking equivalent of [`crate::Client::get_weather`].
    pub fn get_weather(&self, city: &str) -> Result<Weather> {
        let (_, body) = self.fetch(Operation::Weather { city }, Plan::Free)?;
        response::normalize_weather(&body)
    }

    /// Blocking equivalent of [`crate::Client::get_covid_stats`].
    pub fn get_covid_stats(&self, country: Option<&str>) -> Result<CovidData> {
        let (_, body) = self.fetch(Operation::Covid { country }, Plan::Free)?;
        response::normalize_covid(country.is_some(), &body)
    }
}
