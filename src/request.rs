//! Resolves a logical operation into the concrete request for the active
//! API version: target path plus the version-correct query parameters.
//!
//! Resolution is pure and deterministic. All per-version parameter naming,
//! defaults and support checks live here; nothing else in the crate
//! branches on the version for request building.

use crate::error::{Error, Result};
use crate::model::{
    ApiVersion, ImageType, JokeType, Plan, ResponseType, Server, WaifuType, SERVERS_V4, SERVERS_V5,
};

/// A fully resolved request: target path plus ordered query parameters.
///
/// Built fresh for every call and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl RequestSpec {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Optional overrides for the AI response endpoint.
///
/// Unset options fall back to the active version's documented defaults.
/// Options the active version does not recognize are never sent: version 3
/// ignores `server`, versions 4 and 5 ignore `response_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiOptions {
    pub server: Option<Server>,
    pub language: Option<String>,
    pub bot_name: Option<String>,
    pub operator_name: Option<String>,
    pub session_id: Option<String>,
    pub response_type: Option<ResponseType>,
}

/// A logical API operation together with its per-call inputs.
#[derive(Debug, Clone, Copy)]
pub enum Operation<'a> {
    AiResponse {
        message: &'a str,
        options: &'a AiOptions,
    },
    Joke {
        kind: JokeType,
    },
    Image {
        kind: ImageType,
    },
    Waifu {
        kind: WaifuType,
    },
    Weather {
        city: &'a str,
    },
    Covid {
        country: Option<&'a str>,
    },
}

impl Operation<'_> {
    fn name(&self) -> &'static str {
        match self {
            Operation::AiResponse { .. } => "ai response",
            Operation::Joke { .. } => "joke",
            Operation::Image { .. } => "image",
            Operation::Waifu { .. } => "waifu",
            Operation::Weather { .. } => "weather",
            Operation::Covid { .. } => "covid",
        }
    }
}

/// Resolve `operation` into a [`RequestSpec`] for the given version and
/// plan.
///
/// Fails with [`Error::UnsupportedOperation`] before any parameter
/// computation when the operation does not exist under `version`, and with
/// [`Error::InvalidServer`] when a server override falls outside the
/// version's server table.
pub fn resolve(operation: &Operation<'_>, version: ApiVersion, plan: Plan) -> Result<RequestSpec> {
    match operation {
        Operation::AiResponse { message, options } => resolve_ai(message, options, version, plan),
        Operation::Joke { kind } => Ok(resolve_tagged("joke", kind.as_str(), version)),
        Operation::Image { kind } => Ok(resolve_tagged("image", kind.as_str(), version)),
        Operation::Waifu { kind } => {
            require_version(operation, version, ApiVersion::V4)?;
            Ok(RequestSpec {
                path: plan_path(version, plan, "waifu"),
                query: owned(&[("type", kind.as_str())]),
            })
        }
        Operation::Weather { city } => {
            require_version(operation, version, ApiVersion::V4)?;
            Ok(RequestSpec {
                path: format!("{}/weather", version.path_segment()),
                query: owned(&[("city", city)]),
            })
        }
        Operation::Covid { country } => {
            require_version(operation, version, ApiVersion::V4)?;
            let query = match country {
                Some(country) => owned(&[("country", country)]),
                None => Vec::new(),
            };
            Ok(RequestSpec {
                path: format!("{}/covid", version.path_segment()),
                query,
            })
        }
    }
}

fn resolve_ai(
    message: &str,
    options: &AiOptions,
    version: ApiVersion,
    plan: Plan,
) -> Result<RequestSpec> {
    let server = validate_server(options.server, version)?;
    let language = options.language.as_deref().unwrap_or("en");
    let bot_name = options.bot_name.as_deref().unwrap_or("RSA");
    let operator_name = options.operator_name.as_deref().unwrap_or("PGamerX");
    let session_id = options.session_id.as_deref().unwrap_or("");

    let spec = match version {
        ApiVersion::V3 => {
            let response_type = options.response_type.unwrap_or_default();
            RequestSpec {
                path: plan_path(version, plan, "ai/response"),
                query: owned(&[
                    ("message", message),
                    ("lang", language),
                    ("type", response_type.as_str()),
                    ("bot_name", bot_name),
                    ("dev_name", operator_name),
                    ("unique_id", session_id),
                ]),
            }
        }
        ApiVersion::V4 | ApiVersion::V5 => RequestSpec {
            path: plan_path(version, plan, "ai"),
            query: owned(&[
                ("message", message),
                ("server", server.as_str()),
                ("master", operator_name),
                ("bot", bot_name),
                ("uid", session_id),
                ("language", language),
            ]),
        },
    };
    Ok(spec)
}

/// Joke and image tags ride in the path under version 3 and in the query
/// under later versions.
fn resolve_tagged(endpoint: &str, tag: &str, version: ApiVersion) -> RequestSpec {
    match version {
        ApiVersion::V3 => RequestSpec {
            path: format!("{}/{endpoint}/{tag}", version.path_segment()),
            query: Vec::new(),
        },
        ApiVersion::V4 | ApiVersion::V5 => RequestSpec {
            path: format!("{}/{endpoint}", version.path_segment()),
            query: owned(&[("type", tag)]),
        },
    }
}

/// Check a server override against the active version's table and fill in
/// the version default otherwise.
///
/// Version 3 predates the server parameter; the primary-server table is
/// still enforced there, matching how the API treated the option before it
/// was introduced.
fn validate_server(requested: Option<Server>, version: ApiVersion) -> Result<Server> {
    let (table, default) = match version {
        ApiVersion::V3 | ApiVersion::V4 => (SERVERS_V4, Server::Primary),
        ApiVersion::V5 => (SERVERS_V5, Server::Main),
    };
    let server = requested.unwrap_or(default);
    if !table.contains(&server) {
        let known = table
            .iter()
            .map(Server::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::InvalidServer(format!(
            "`{server}` is not a server of API version {version}; choose from {known}"
        )));
    }
    Ok(server)
}

/// Version-prefixed path with the plan segment spliced in for paid tiers.
/// Version 5 additionally nests paid tiers under `premium/`.
fn plan_path(version: ApiVersion, plan: Plan, tail: &str) -> String {
    let prefix = version.path_segment();
    if plan.is_free() {
        format!("{prefix}/{tail}")
    } else if version == ApiVersion::V5 {
        format!("{prefix}/premium/{}/{tail}", plan.as_str())
    } else {
        format!("{prefix}/{}/{tail}", plan.as_str())
    }
}

fn require_version(
    operation: &Operation<'_>,
    version: ApiVersion,
    oldest: ApiVersion,
) -> Result<()> {
    if version < oldest {
        return Err(Error::UnsupportedOperation(format!(
            "{} requires API version {oldest} or newer (got {version})",
            operation.name()
        )));
    }
    Ok(())
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
