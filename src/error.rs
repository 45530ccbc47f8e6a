//! Error types for the fetch pipeline.
//!
//! Listing-level failures surface as [`FetchError`] and abort the cycle.
//! Per-article problems are described by [`SkipReason`]; they are logged and
//! the article is dropped, never returned to the caller.

use reqwest::StatusCode;
use thiserror::Error;

/// A single HTTP request failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Why an article candidate was dropped during extraction.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("article page has no paragraph text")]
    EmptyBody,

    #[error("unparseable datetime attribute {0:?}")]
    BadTimestamp(String),
}

/// Problems loading or applying the YAML configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid CSS selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("invalid site origin {origin}: {source}")]
    InvalidUrl {
        origin: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Top-level error for a fetch cycle or an output step.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown section {0:?}")]
    UnknownSection(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
