//! Shapes raw endpoint payloads into the typed results and maps HTTP
//! statuses to their error kinds.
//!
//! Each `normalize_*` function is pure and deterministic. All per-version
//! payload-shape knowledge lives here, mirroring how `request` owns the
//! per-version parameter knowledge.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::ApiVersion;
use crate::request::RequestSpec;
use crate::types::{
    AIResponse, CountryCovidData, CovidData, GlobalCovidData, Joke, JokeBody, JokeFlags, Waifu,
    Weather,
};

/// Map a non-success HTTP status to its error kind, carrying the response
/// body text verbatim. Unmapped statuses fall through to normalization.
pub(crate) fn check_status(status: u16, body: &str) -> Result<()> {
    match status {
        401 => Err(Error::Unauthorized(body.to_owned())),
        403 => Err(Error::Forbidden(body.to_owned())),
        429 => Err(Error::RateLimited(body.to_owned())),
        500..=599 => Err(Error::RemoteFault {
            status,
            body: body.to_owned(),
        }),
        _ => Ok(()),
    }
}

/// Normalize an AI response body.
///
/// Versions 3 and 4 return arrays; version 5 returns a single object. The
/// timing field is taken from the second array element whenever one is
/// present. Versions 4 and 5 surface the session id and server from the
/// resolved request itself, since the version 5 backend stopped echoing
/// them in the body.
pub fn normalize_ai(version: ApiVersion, body: &Value, request: &RequestSpec) -> Result<AIResponse> {
    let head = match body {
        Value::Array(items) => items
            .first()
            .ok_or_else(|| Error::MalformedResponse("AI response array is empty".to_owned()))?,
        Value::Object(_) => body,
        _ => {
            return Err(Error::MalformedResponse(
                "AI response body is neither an array nor an object".to_owned(),
            ))
        }
    };
    let message = str_field(head, "message", "AI response")?;

    let response_time = match body {
        Value::Array(items) => items
            .get(1)
            .and_then(|timing| timing.get("response_time"))
            .and_then(Value::as_str)
            .map(str::to_owned),
        _ => None,
    };

    let mut response = AIResponse {
        message,
        response_time,
        success: None,
        api_key: None,
        session_id: None,
        server: None,
    };
    match version {
        ApiVersion::V3 => {
            response.success = head.get("success").and_then(Value::as_bool);
            response.api_key = head
                .get("api_key")
                .and_then(Value::as_str)
                .map(str::to_owned);
        }
        ApiVersion::V4 | ApiVersion::V5 => {
            response.session_id = request
                .param("uid")
                .filter(|uid| !uid.is_empty())
                .map(str::to_owned);
            response.server = request.param("server").map(str::to_owned);
        }
    }
    Ok(response)
}

/// Normalize a joke body.
///
/// The payload's `type` field is authoritative for which text fields carry
/// the joke; presence of `joke` or `setup` alone is never trusted.
pub fn normalize_joke(body: &Value) -> Result<Joke> {
    let kind = str_field(body, "type", "joke")?;
    let joke_body = match kind.as_str() {
        "single" => JokeBody::Single(str_field(body, "joke", "joke")?),
        "twopart" => JokeBody::Twopart {
            setup: str_field(body, "setup", "joke")?,
            delivery: str_field(body, "delivery", "joke")?,
        },
        other => {
            return Err(Error::MalformedResponse(format!(
                "unknown joke type `{other}`"
            )))
        }
    };

    let flags_raw = body
        .get("flags")
        .cloned()
        .ok_or_else(|| missing("flags", "joke"))?;
    let flags: JokeFlags = serde_json::from_value(flags_raw)
        .map_err(|err| Error::MalformedResponse(format!("joke flags: {err}")))?;

    Ok(Joke {
        category: str_field(body, "category", "joke")?,
        body: joke_body,
        flags,
        id: body
            .get("id")
            .and_then(Value::as_u64)
            .ok_or_else(|| missing("id", "joke"))?,
        safe: body
            .get("safe")
            .and_then(Value::as_bool)
            .ok_or_else(|| missing("safe", "joke"))?,
        lang: str_field(body, "lang", "joke")?,
    })
}

/// The image endpoint returns a one-element array holding the URL.
pub fn normalize_image(body: &Value) -> Result<String> {
    body.get(0)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| Error::MalformedResponse("image payload missing the URL".to_owned()))
}

pub fn normalize_waifu(body: &Value) -> Result<Waifu> {
    let url = body
        .get(0)
        .and_then(|entry| entry.get("url"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| Error::MalformedResponse("waifu payload missing `url`".to_owned()))?;
    Ok(Waifu { url })
}

/// Normalize a weather body. An in-band `error: true` marker means the
/// city was not found and fails with [`Error::InvalidCity`].
pub fn normalize_weather(body: &Value) -> Result<Weather> {
    let head = body
        .get(0)
        .ok_or_else(|| Error::MalformedResponse("weather payload is empty".to_owned()))?;
    if head.get("error").and_then(Value::as_bool) == Some(true) {
        let message = head
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("city not found")
            .to_owned();
        return Err(Error::InvalidCity(message));
    }
    serde_json::from_value(head.clone())
        .map_err(|err| Error::MalformedResponse(format!("weather: {err}")))
}

/// Normalize a COVID-19 body. `country_requested` reflects whether the
/// call carried a country filter; the world-totals and single-country
/// shapes are disjoint and selected by that flag, never by payload
/// sniffing.
pub fn normalize_covid(country_requested: bool, body: &Value) -> Result<CovidData> {
    let head = body
        .get(0)
        .ok_or_else(|| Error::MalformedResponse("covid payload is empty".to_owned()))?;
    if country_requested {
        let data: CountryCovidData = serde_json::from_value(head.clone())
            .map_err(|err| Error::MalformedResponse(format!("covid country data: {err}")))?;
        Ok(CovidData::Country(data))
    } else {
        let data: GlobalCovidData = serde_json::from_value(head.clone())
            .map_err(|err| Error::MalformedResponse(format!("covid global data: {err}")))?;
        Ok(CovidData::Global(data))
    }
}

fn missing(field: &str, context: &str) -> Error {
    Error::MalformedResponse(format!("{context} payload missing `{field}`"))
}

fn str_field(value: &Value, field: &str, context: &str) -> Result<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| missing(field, context))
}
