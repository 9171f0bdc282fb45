//! Resolution API client.
//!
//! Uses the curl crate (libcurl) for a single GET per resolve:
//! `<endpoint>?share_url=<link>` with a bearer credential. No retries; the
//! caller decides whether to ask the user to try again.

mod classify;

pub use classify::{interpret, validation_message};

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::config::DygetConfig;
use crate::error::ResolveError;

/// Source of raw payloads for a share link. The composed resolver only
/// depends on this trait, so tests can stand in for the network.
pub trait Upstream {
    /// Fetches the upstream payload for `share_url`, the extracted and
    /// normalized share link (`https://` scheme, surrounding text removed).
    fn fetch(&self, share_url: &str) -> Result<Value, ResolveError>;
}

impl<T: Upstream + ?Sized> Upstream for Arc<T> {
    fn fetch(&self, share_url: &str) -> Result<Value, ResolveError> {
        (**self).fetch(share_url)
    }
}

/// libcurl-backed client for the resolution API.
#[derive(Debug, Clone)]
pub struct ResolutionClient {
    endpoint: Url,
    api_key: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ResolutionClient {
    /// Client for `endpoint` authenticating with `api_key`.
    pub fn new(endpoint: &str, api_key: &str) -> Result<Self, ResolveError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ResolveError::MissingApiKey);
        }
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ResolveError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        Ok(Self {
            endpoint,
            api_key: api_key.to_string(),
            timeout: None,
            user_agent: None,
        })
    }

    pub fn from_config(cfg: &DygetConfig) -> Result<Self, ResolveError> {
        let api_key = cfg.api_key.as_deref().ok_or(ResolveError::MissingApiKey)?;
        let mut client = Self::new(&cfg.endpoint, api_key)?;
        client.timeout = cfg.timeout_secs.map(Duration::from_secs);
        client.user_agent = cfg.user_agent.clone();
        Ok(client)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Full request URL with `share_url` encoded into the query string.
    pub fn request_url(&self, share_url: &str) -> String {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("share_url", share_url);
        url.into()
    }

    /// Performs the GET and classifies the response.
    ///
    /// Runs in the current thread; call from `spawn_blocking` if used from async code.
    pub fn resolve(&self, share_url: &str) -> Result<Value, ResolveError> {
        let request_url = self.request_url(share_url);
        tracing::info!(endpoint = %self.endpoint, share_url, "requesting resolution");

        let (status, body) = self.get(&request_url).map_err(|e| {
            tracing::warn!(error = %e, "resolution request failed");
            ResolveError::Network(e.to_string())
        })?;
        tracing::debug!(status, bytes = body.len(), "resolution response received");

        interpret(status, &body, self.endpoint.as_str()).map_err(|e| {
            tracing::warn!(status, error = %e, "resolution rejected");
            e
        })
    }

    fn get(&self, request_url: &str) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(request_url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        if let Some(timeout) = self.timeout {
            easy.timeout(timeout)?;
        }
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        let mut list = curl::easy::List::new();
        list.append(&format!("Authorization: Bearer {}", self.api_key))?;
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok((status, body))
    }
}

impl Upstream for ResolutionClient {
    fn fetch(&self, share_url: &str) -> Result<Value, ResolveError> {
        self.resolve(share_url)
    }
}
