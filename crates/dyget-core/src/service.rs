//! The composed resolve flow handed to the UI layer:
//! share text → link → id → upstream payload → [`VideoRecord`].

use serde::Serialize;
use std::sync::Arc;

use crate::client::Upstream;
use crate::error::ResolveError;
use crate::link::{self, ShareLink};
use crate::mapper::{self, VideoRecord};

/// `{ found, url?, error? }` outcome of pulling a link out of pasted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<String, ResolveError>> for ExtractionResult {
    fn from(r: Result<String, ResolveError>) -> Self {
        match r {
            Ok(url) => Self { found: true, url: Some(url), error: None },
            Err(e) => Self { found: false, url: None, error: Some(e.to_string()) },
        }
    }
}

/// `{ success, data?, error? }` envelope returned by [`VideoResolver::resolve_outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<VideoRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<VideoRecord, ResolveError>> for ResolveOutcome {
    fn from(r: Result<VideoRecord, ResolveError>) -> Self {
        match r {
            Ok(record) => Self { success: true, data: Some(record), error: None },
            Err(e) => Self { success: false, data: None, error: Some(e.to_string()) },
        }
    }
}

/// Display-only view of a record, without the media URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub title: String,
    pub cover_image: String,
    /// `MM:SS`, empty when unknown.
    pub duration: String,
    /// Formatted size, empty when unknown.
    pub size: String,
}

impl From<&VideoRecord> for VideoSummary {
    fn from(r: &VideoRecord) -> Self {
        Self {
            title: r.title().to_string(),
            cover_image: r.cover_image().to_string(),
            duration: r.display_duration(),
            size: r.display_size(),
        }
    }
}

/// Clipboard-helper flow: find, then validate, a link in `text`.
pub fn extract_link(text: &str) -> ExtractionResult {
    let result = if text.trim().is_empty() {
        Err(ResolveError::InputEmpty)
    } else {
        match link::extract(text) {
            Some(url) if link::is_valid(&url) => Ok(url),
            _ => Err(ResolveError::InvalidLink),
        }
    };
    result.into()
}

/// Local half of the flow: everything up to, not including, the request.
/// Fails with [`ResolveError::IdentifierNotFound`] before any network call.
pub fn prepare(text: &str) -> Result<(ShareLink, String), ResolveError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ResolveError::InputEmpty);
    }

    let raw = link::extract(trimmed)
        .or_else(|| bare_link(trimmed))
        .ok_or(ResolveError::InvalidLink)?;
    let share = ShareLink::parse(&raw).ok_or(ResolveError::InvalidLink)?;
    let id = share.id.clone().ok_or(ResolveError::IdentifierNotFound)?;
    tracing::debug!(url = %share.url, id = %id, "share link prepared");
    Ok((share, id))
}

/// A schemeless link pasted on its own, e.g. `v.douyin.com/abc123/`.
fn bare_link(text: &str) -> Option<String> {
    (!text.contains(char::is_whitespace) && link::is_valid(text)).then(|| text.to_string())
}

fn finish(payload: &serde_json::Value) -> Result<VideoRecord, ResolveError> {
    let record = mapper::map(payload);
    if !record.is_playable() {
        tracing::warn!(id = %record.id(), "payload mapped without a media URL");
        return Err(ResolveError::MappingIncomplete);
    }
    Ok(record)
}

/// Chains extraction, identifier lookup, the upstream request and mapping.
pub struct VideoResolver<U> {
    upstream: Arc<U>,
}

impl<U> Clone for VideoResolver<U> {
    fn clone(&self) -> Self {
        Self { upstream: Arc::clone(&self.upstream) }
    }
}

impl<U: Upstream> VideoResolver<U> {
    pub fn new(upstream: U) -> Self {
        Self { upstream: Arc::new(upstream) }
    }

    /// Blocking resolve of share `text` into a playable record.
    pub fn resolve_video(&self, text: &str) -> Result<VideoRecord, ResolveError> {
        let (share, _id) = prepare(text)?;
        let payload = self.upstream.fetch(&share.url)?;
        finish(&payload)
    }

    /// [`resolve_video`](Self::resolve_video) wrapped in the UI envelope.
    pub fn resolve_outcome(&self, text: &str) -> ResolveOutcome {
        self.resolve_video(text).into()
    }

    /// Title, cover, duration and size only.
    pub fn video_summary(&self, text: &str) -> Result<VideoSummary, ResolveError> {
        self.resolve_video(text).map(|r| VideoSummary::from(&r))
    }
}

impl<U: Upstream + Send + Sync + 'static> VideoResolver<U> {
    /// Like [`resolve_video`](Self::resolve_video), with the request on the
    /// blocking pool so the calling task suspends instead of the worker thread.
    pub async fn resolve_video_async(&self, text: &str) -> Result<VideoRecord, ResolveError> {
        let (share, _id) = prepare(text)?;
        let payload = tokio::task::spawn_blocking({
            let upstream = Arc::clone(&self.upstream);
            move || upstream.fetch(&share.url)
        })
        .await
        .map_err(|e| ResolveError::Network(format!("resolve task join: {e}")))??;
        finish(&payload)
    }

    pub async fn resolve_outcome_async(&self, text: &str) -> ResolveOutcome {
        self.resolve_video_async(text).await.into()
    }
}
