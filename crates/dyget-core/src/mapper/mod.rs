//! Maps a loosely-structured upstream payload into a [`VideoRecord`].

pub mod rules;

use serde::Serialize;
use serde_json::Value;

use crate::format::{format_duration, format_size};
use rules::{as_count, as_text, first};

/// Canonical result of one resolution. Every field except
/// `direct_media_url` is best-effort and may be empty or zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    id: String,
    title: String,
    origin_url: String,
    direct_media_url: String,
    cover_image: String,
    duration_seconds: u64,
    size_bytes: Option<u64>,
}

impl VideoRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn origin_url(&self) -> &str {
        &self.origin_url
    }

    pub fn direct_media_url(&self) -> &str {
        &self.direct_media_url
    }

    pub fn cover_image(&self) -> &str {
        &self.cover_image
    }

    pub fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }

    pub fn size_bytes(&self) -> Option<u64> {
        self.size_bytes
    }

    /// A record is only worth showing when it carries a media URL.
    pub fn is_playable(&self) -> bool {
        !self.direct_media_url.is_empty()
    }

    /// `MM:SS`, or empty when the duration is unknown.
    pub fn display_duration(&self) -> String {
        match self.duration_seconds {
            0 => String::new(),
            s => format_duration(s),
        }
    }

    /// `1.50KB`-style size, or empty when unknown.
    pub fn display_size(&self) -> String {
        self.size_bytes.map(format_size).unwrap_or_default()
    }
}

/// Builds a record from `payload`. Never fails: a field whose rules all miss
/// keeps its default and the others are still filled.
pub fn map(payload: &Value) -> VideoRecord {
    let record = VideoRecord {
        id: first(payload, rules::ID, as_text).unwrap_or_default(),
        title: first(payload, rules::TITLE, as_text).unwrap_or_default(),
        origin_url: first(payload, rules::ORIGIN_URL, as_text).unwrap_or_default(),
        direct_media_url: first(payload, rules::DIRECT_MEDIA_URL, as_text).unwrap_or_default(),
        cover_image: first(payload, rules::COVER_IMAGE, as_text).unwrap_or_default(),
        duration_seconds: first(payload, rules::DURATION, as_count).unwrap_or_default(),
        size_bytes: first(payload, rules::SIZE, as_count),
    };
    tracing::debug!(
        id = %record.id,
        playable = record.is_playable(),
        has_cover = !record.cover_image.is_empty(),
        "mapped upstream payload"
    );
    record
}
