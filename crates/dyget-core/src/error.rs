//! Failure taxonomy for link resolution.

use thiserror::Error;

/// Every way a single resolve can fail. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("input is empty")]
    InputEmpty,
    #[error("invalid link")]
    InvalidLink,
    #[error("could not extract a video id from the link")]
    IdentifierNotFound,
    #[error("no API key configured (set api_key in config.toml or DYGET_API_KEY)")]
    MissingApiKey,
    #[error("invalid API endpoint {0}")]
    InvalidEndpoint(String),
    #[error("network request failed: {0}")]
    Network(String),
    #[error("{0}")]
    Upstream(String),
    #[error("upstream returned an unreadable payload: {0}")]
    InvalidPayload(String),
    #[error("API endpoint not found: {0}")]
    EndpointNotFound(String),
    #[error("API key is invalid or expired")]
    InvalidCredential,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("too many requests, try again later")]
    RateLimited,
    #[error("upstream server error, status {0}")]
    UpstreamServer(u32),
    #[error("API request failed, status {0}")]
    UnexpectedStatus(u32),
    #[error("no watermark-free video URL in the response")]
    MappingIncomplete,
}

impl ResolveError {
    /// True when the failure happened before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ResolveError::InputEmpty
                | ResolveError::InvalidLink
                | ResolveError::IdentifierNotFound
                | ResolveError::MissingApiKey
                | ResolveError::InvalidEndpoint(_)
        )
    }
}
