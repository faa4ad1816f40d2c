//! Typed results returned by the API endpoints.
//!
//! Every record here is plain immutable data built once from a decoded
//! response body. Fields a given API version does not report stay `None`;
//! check presence, not falsiness.

use std::fmt;

use serde::Deserialize;

/// Normalized AI chat response.
///
/// Version 3 reports `success` and echoes the `api_key`; versions 4 and 5
/// report `response_time` (when the request did not short-circuit) and
/// surface the session id and server the request was resolved with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AIResponse {
    pub message: String,
    pub response_time: Option<String>,
    pub success: Option<bool>,
    pub api_key: Option<String>,
    pub session_id: Option<String>,
    pub server: Option<String>,
}

impl fmt::Display for AIResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Content moderation markers attached to every joke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct JokeFlags {
    pub nsfw: bool,
    pub religious: bool,
    pub political: bool,
    pub racist: bool,
    pub sexist: bool,
    pub explicit: bool,
}

/// The joke text; which variant applies is decided by the payload's `type`
/// field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JokeBody {
    Single(String),
    Twopart { setup: String, delivery: String },
}

impl fmt::Display for JokeBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JokeBody::Single(joke) => f.write_str(joke),
            JokeBody::Twopart { setup, delivery } => write!(f, "{setup}. {delivery}"),
        }
    }
}

/// A joke returned by the joke endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub category: String,
    pub body: JokeBody,
    pub flags: JokeFlags,
    pub id: u64,
    pub safe: bool,
    pub lang: String,
}

impl fmt::Display for Joke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.body, f)
    }
}

/// A waifu image link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waifu {
    pub url: String,
}

impl fmt::Display for Waifu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Where a weather report applies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeatherLocation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub long: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub alert: Option<String>,
    #[serde(default, rename = "degreetype")]
    pub degree_type: Option<String>,
    #[serde(default, rename = "imagerelativeurl")]
    pub image_relative_url: Option<String>,
}

/// Present conditions at the reported location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub temperature: Option<String>,
    #[serde(default, rename = "skycode")]
    pub sky_code: Option<String>,
    #[serde(default, rename = "skytext")]
    pub sky_text: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "observationtime")]
    pub observation_time: Option<String>,
    #[serde(default, rename = "observationpoint")]
    pub observation_point: Option<String>,
    #[serde(default, rename = "feelslike")]
    pub feels_like: Option<String>,
    #[serde(default)]
    pub humidity: Option<String>,
    #[serde(default, rename = "winddisplay")]
    pub wind_display: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default, rename = "shortday")]
    pub short_day: Option<String>,
    #[serde(default, rename = "windspeed")]
    pub wind_speed: Option<String>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// One forecast entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeatherForecast {
    #[serde(default)]
    pub low: Option<String>,
    #[serde(default)]
    pub high: Option<String>,
    #[serde(default, rename = "skycodeday")]
    pub sky_code_day: Option<String>,
    #[serde(default, rename = "skytextday")]
    pub sky_text_day: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default, rename = "shortday")]
    pub short_day: Option<String>,
    #[serde(default, rename = "precip")]
    pub precipitation: Option<String>,
}

/// Weather report for a city.
///
/// `forecast` is chronological; the first entry is the soonest day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Weather {
    pub location: WeatherLocation,
    #[serde(default)]
    pub current: Option<CurrentWeather>,
    pub forecast: Vec<WeatherForecast>,
}

/// Mild/critical breakdown of currently active COVID-19 cases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CovidCondition {
    #[serde(default)]
    pub mild: Option<String>,
    #[serde(default)]
    pub critical: Option<String>,
}

/// World-wide COVID-19 totals.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GlobalCovidData {
    #[serde(default)]
    pub total_cases: Option<String>,
    #[serde(default)]
    pub total_deaths: Option<String>,
    #[serde(default)]
    pub total_recovered: Option<String>,
    #[serde(default)]
    pub active_cases: Option<String>,
    #[serde(default)]
    pub closed_cases: Option<String>,
    #[serde(default)]
    pub condition: Option<CovidCondition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CovidCountry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub flag_img: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CovidCases {
    #[serde(default)]
    pub total: Option<String>,
    #[serde(default)]
    pub recovered: Option<String>,
    #[serde(default)]
    pub deaths: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClosedCasesPercentage {
    #[serde(default)]
    pub death: Option<String>,
    #[serde(default)]
    pub discharge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClosedCases {
    #[serde(default)]
    pub percentage: Option<ClosedCasesPercentage>,
    #[serde(default)]
    pub total: Option<String>,
}

/// COVID-19 statistics for a single country.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryCovidData {
    #[serde(default)]
    pub country: Option<CovidCountry>,
    #[serde(default)]
    pub cases: Option<CovidCases>,
    #[serde(default)]
    pub closed_cases: Option<ClosedCases>,
}

/// COVID-19 statistics, world totals or a single country.
///
/// Which variant is produced depends on whether the call supplied a country
/// filter, not on the payload shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CovidData {
    Global(GlobalCovidData),
    Country(CountryCovidData),
}
