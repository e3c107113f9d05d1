// src/github/error.rs
// =============================================================================
// Typed errors for everything that can go wrong while talking to GitHub.
//
// The rest of the app uses anyhow, but the client keeps a concrete enum so
// callers can tell a transport failure apart from a bad payload.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("base64 decode error for {context}: {source}")]
    Base64 {
        context: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("invalid API base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
