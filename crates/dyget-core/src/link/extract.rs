//! Link extraction from free-form text, scheme normalization and domain checks.

use once_cell::sync::Lazy;
use regex::Regex;

/// Domain substrings a link must contain to be treated as a Douyin link.
pub const RECOGNIZED_DOMAINS: [&str; 2] = ["douyin.com", "iesdouyin.com"];

/// Tried in order: short link, canonical, share domain, mobile.
static LINK_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)https?://v\.douyin\.com/[A-Za-z0-9]+/?",
        r"(?i)https?://(?:www\.)?douyin\.com/\S*",
        r"(?i)https?://(?:www\.)?iesdouyin\.com/\S*",
        r"(?i)https?://m\.douyin\.com/\S*",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static link pattern"))
    .collect()
});

static TRAILING_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;。，；！!？?]+$").expect("static punctuation pattern"));

/// Finds the first Douyin link in `text`, with trailing punctuation removed.
pub fn extract(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    LINK_PATTERNS.iter().find_map(|re| {
        re.find(text).map(|m| {
            let url = TRAILING_PUNCT.replace(m.as_str(), "").into_owned();
            tracing::debug!(pattern = re.as_str(), url = %url, "share link matched");
            url
        })
    })
}

/// `url` without a leading `prefix`, compared ASCII case-insensitively.
fn strip_prefix_ignore_case<'a>(url: &'a str, prefix: &str) -> Option<&'a str> {
    url.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &url[prefix.len()..])
}

/// Trims whitespace and rewrites a leading `http:` or `https:` (any case) to `https:`.
pub fn normalize(url: &str) -> String {
    let url = url.trim();
    match strip_prefix_ignore_case(url, "https:").or_else(|| strip_prefix_ignore_case(url, "http:")) {
        Some(rest) => format!("https:{rest}"),
        None => url.to_string(),
    }
}

/// Ensures the link carries a scheme, defaulting to `https://`.
pub fn preprocess(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    let has_scheme = ["http://", "https://"]
        .iter()
        .any(|scheme| strip_prefix_ignore_case(url, scheme).is_some());
    if has_scheme {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// True if the scheme-qualified form of `url` mentions a recognized domain.
pub fn is_valid(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    let url = preprocess(url).to_ascii_lowercase();
    RECOGNIZED_DOMAINS.iter().any(|d| url.contains(d))
}
