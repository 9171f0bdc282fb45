//! Video identifier extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// Priority order: short-link token, iesdouyin share, canonical video, canonical share.
static ID_PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        Regex::new(r"(?i:v\.douyin\.com)/([a-zA-Z0-9]+)").expect("static id pattern"),
        Regex::new(r"(?i:(?:www\.)?iesdouyin\.com)/share/video/(\d+)").expect("static id pattern"),
        Regex::new(r"(?i:(?:www\.)?douyin\.com)/video/(\d+)").expect("static id pattern"),
        Regex::new(r"(?i:(?:www\.)?douyin\.com)/share/video/(\d+)").expect("static id pattern"),
    ]
});

/// Returns the video identifier captured by the first matching pattern.
pub fn extract_id(url: &str) -> Option<String> {
    ID_PATTERNS
        .iter()
        .filter_map(|re| re.captures(url))
        .find_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
}
