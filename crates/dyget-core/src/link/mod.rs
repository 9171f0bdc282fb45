//! Share-link handling: find a Douyin link in pasted text, normalize it, and
//! pull out the video identifier.
//!
//! Share text from the app usually wraps the link in prose and emoji
//! ("7.43 复制打开抖音，看看【...】 https://v.douyin.com/abc123/ ..."), so
//! extraction is a containment search, not a full-string match.

mod extract;
mod id;

pub use extract::{extract, is_valid, normalize, preprocess, RECOGNIZED_DOMAINS};
pub use id::extract_id;

/// A link found in share text together with its video identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    /// Normalized, scheme-qualified link (what gets sent upstream).
    pub url: String,
    /// Platform video identifier (short-link token or numeric id).
    pub id: Option<String>,
}

impl ShareLink {
    /// Normalizes `url` and extracts its identifier. Returns None when the
    /// normalized link is not on a recognized domain.
    pub fn parse(url: &str) -> Option<Self> {
        let url = preprocess(&normalize(url));
        if !is_valid(&url) {
            return None;
        }
        let id = extract_id(&url);
        Some(Self { url, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_and_extracts_id() {
        let link = ShareLink::parse("  http://v.douyin.com/abc123/ ").unwrap();
        assert_eq!(link.url, "https://v.douyin.com/abc123/");
        assert_eq!(link.id.as_deref(), Some("abc123"));
    }

    #[test]
    fn parse_adds_scheme() {
        let link = ShareLink::parse("www.douyin.com/video/7301234567890123456").unwrap();
        assert_eq!(link.url, "https://www.douyin.com/video/7301234567890123456");
        assert_eq!(link.id.as_deref(), Some("7301234567890123456"));
    }

    #[test]
    fn parse_rejects_other_domains() {
        assert!(ShareLink::parse("https://example.com/video/1").is_none());
        assert!(ShareLink::parse("").is_none());
    }

    #[test]
    fn parse_keeps_link_without_id() {
        let link = ShareLink::parse("https://www.douyin.com/").unwrap();
        assert!(link.id.is_none());
    }
}
