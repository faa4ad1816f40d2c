use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure mode surfaced by the client.
///
/// Validation variants are raised before any network activity. The
/// status-mapped variants (`Unauthorized`, `Forbidden`, `RateLimited`,
/// `RemoteFault`) carry the response body text verbatim so callers can see
/// what the API reported. `MalformedResponse` means the payload broke the
/// documented contract for the active version.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid plan: {0}")]
    InvalidPlan(String),

    #[error("invalid server: {0}")]
    InvalidServer(String),

    #[error("invalid type: {0}")]
    InvalidType(String),

    #[error("invalid version: {0}")]
    InvalidVersion(String),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid city: {0}")]
    InvalidCity(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("remote fault (status {status}): {body}")]
    RemoteFault { status: u16, body: String },

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}
