//! Contract constants: API versions, plans, servers and request type tags.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Supported Random Stuff API versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ApiVersion {
    V3,
    V4,
    V5,
}

pub const SUPPORTED_VERSIONS: &[ApiVersion] = &[ApiVersion::V3, ApiVersion::V4, ApiVersion::V5];

/// Version tokens the API no longer serves.
pub const DISCONTINUED_VERSIONS: &[&str] = &["2"];

pub const DEFAULT_VERSION: ApiVersion = ApiVersion::V4;

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V3 => "3",
            ApiVersion::V4 => "4",
            ApiVersion::V5 => "5",
        }
    }

    /// URL path prefix selecting this version, e.g. `v4`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ApiVersion::V3 => "v3",
            ApiVersion::V4 => "v4",
            ApiVersion::V5 => "v5",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        if DISCONTINUED_VERSIONS.contains(&s) {
            return Err(Error::InvalidVersion(format!(
                "version {s} has been discontinued; migrate to version {}",
                ApiVersion::V5
            )));
        }
        match s {
            "3" => Ok(ApiVersion::V3),
            "4" => Ok(ApiVersion::V4),
            "5" => Ok(ApiVersion::V5),
            other => Err(Error::InvalidVersion(format!(
                "unknown API version `{other}`; choose from 3, 4 or 5"
            ))),
        }
    }
}

/// Paid plan tiers, ordered lowest to highest.
///
/// `Free` is the default tier and contributes no path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Plan {
    #[default]
    Free,
    Pro,
    Ultra,
    Biz,
    Mega,
}

pub const PLANS: &[Plan] = &[Plan::Free, Plan::Pro, Plan::Ultra, Plan::Biz, Plan::Mega];

impl Plan {
    /// Path segment for the plan; empty for the free tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "",
            Plan::Pro => "pro",
            Plan::Ultra => "ultra",
            Plan::Biz => "biz",
            Plan::Mega => "mega",
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Plan::Free)
    }
}

impl FromStr for Plan {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "" | "free" => Ok(Plan::Free),
            "pro" => Ok(Plan::Pro),
            "ultra" => Ok(Plan::Ultra),
            "biz" => Ok(Plan::Biz),
            "mega" => Ok(Plan::Mega),
            other => Err(Error::InvalidPlan(format!(
                "unknown plan `{other}`; choose from pro, ultra, biz or mega"
            ))),
        }
    }
}

/// Upstream backend selector for the AI response endpoint.
///
/// Which identifiers are accepted depends on the API version; the resolver
/// checks the request against the active version's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Server {
    Primary,
    Backup,
    Unstable,
    Main,
}

pub const SERVERS_V4: &[Server] = &[Server::Primary, Server::Backup, Server::Unstable];
pub const SERVERS_V5: &[Server] = &[Server::Main, Server::Backup];

impl Server {
    pub fn as_str(&self) -> &'static str {
        match self {
            Server::Primary => "primary",
            Server::Backup => "backup",
            Server::Unstable => "unstable",
            Server::Main => "main",
        }
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Server {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "primary" => Ok(Server::Primary),
            "backup" => Ok(Server::Backup),
            "unstable" => Ok(Server::Unstable),
            "main" => Ok(Server::Main),
            other => Err(Error::InvalidServer(format!("unknown server `{other}`"))),
        }
    }
}

/// Response stability selector for the version 3 AI endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResponseType {
    #[default]
    Stable,
    Unstable,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Stable => "stable",
            ResponseType::Unstable => "unstable",
        }
    }
}

/// Joke categories accepted by the joke endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JokeType {
    #[default]
    Any,
    Dev,
    Spooky,
    Pun,
}

pub const JOKE_TYPES: &[JokeType] = &[JokeType::Any, JokeType::Dev, JokeType::Spooky, JokeType::Pun];

impl JokeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JokeType::Any => "any",
            JokeType::Dev => "dev",
            JokeType::Spooky => "spooky",
            JokeType::Pun => "pun",
        }
    }
}

impl FromStr for JokeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "any" => Ok(JokeType::Any),
            "dev" => Ok(JokeType::Dev),
            "spooky" => Ok(JokeType::Spooky),
            "pun" => Ok(JokeType::Pun),
            other => Err(Error::InvalidType(format!("unknown joke type `{other}`"))),
        }
    }
}

/// Image categories accepted by the image endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ImageType {
    #[default]
    Any,
    Aww,
    Duck,
    Dog,
    Cat,
    Memes,
    DankMemes,
    Holup,
    Art,
    HarryPotterMemes,
    Facepalm,
}

pub const IMAGE_TYPES: &[ImageType] = &[
    ImageType::Any,
    ImageType::Aww,
    ImageType::Duck,
    ImageType::Dog,
    ImageType::Cat,
    ImageType::Memes,
    ImageType::DankMemes,
    ImageType::Holup,
    ImageType::Art,
    ImageType::HarryPotterMemes,
    ImageType::Facepalm,
];

impl ImageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Any => "any",
            ImageType::Aww => "aww",
            ImageType::Duck => "duck",
            ImageType::Dog => "dog",
            ImageType::Cat => "cat",
            ImageType::Memes => "memes",
            ImageType::DankMemes => "dankmemes",
            ImageType::Holup => "holup",
            ImageType::Art => "art",
            ImageType::HarryPotterMemes => "harrypottermemes",
            ImageType::Facepalm => "facepalm",
        }
    }
}

impl FromStr for ImageType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "any" => Ok(ImageType::Any),
            "aww" => Ok(ImageType::Aww),
            "duck" => Ok(ImageType::Duck),
            "dog" => Ok(ImageType::Dog),
            "cat" => Ok(ImageType::Cat),
            "memes" => Ok(ImageType::Memes),
            "dankmemes" => Ok(ImageType::DankMemes),
            "holup" => Ok(ImageType::Holup),
            "art" => Ok(ImageType::Art),
            "harrypottermemes" => Ok(ImageType::HarryPotterMemes),
            "facepalm" => Ok(ImageType::Facepalm),
            other => Err(Error::InvalidType(format!("unknown image type `{other}`"))),
        }
    }
}

/// Waifu categories accepted by the waifu endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WaifuType {
    #[default]
    Waifu,
    Neko,
    Shinobu,
    Megumin,
    Bully,
    Cuddle,
}

pub const WAIFU_TYPES: &[WaifuType] = &[
    WaifuType::Waifu,
    WaifuType::Neko,
    WaifuType::Shinobu,
    WaifuType::Megumin,
    WaifuType::Bully,
    WaifuType::Cuddle,
];

impl WaifuType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaifuType::Waifu => "waifu",
            WaifuType::Neko => "neko",
            WaifuType::Shinobu => "shinobu",
            WaifuType::Megumin => "megumin",
            WaifuType::Bully => "bully",
            WaifuType::Cuddle => "cuddle",
        }
    }
}

impl FromStr for WaifuType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "waifu" => Ok(WaifuType::Waifu),
            "neko" => Ok(WaifuType::Neko),
            "shinobu" => Ok(WaifuType::Shinobu),
            "megumin" => Ok(WaifuType::Megumin),
            "bully" => Ok(WaifuType::Bully),
            "cuddle" => Ok(WaifuType::Cuddle),
            other => Err(Error::InvalidType(format!("unknown waifu type `{other}`"))),
        }
    }
}
