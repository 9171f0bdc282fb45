//! Per-field fallback chains over the upstream payload.
//!
//! The upstream schema is not fixed: the current API nests everything under
//! `data.aweme_detail`, older deployments returned flat aliases. Each field is
//! a list of rules tried in order; the first usable value wins. Add a rule to
//! the relevant table to follow a new field name.

use serde_json::Value;

/// One way to locate a field in the payload.
#[derive(Clone, Copy)]
pub enum Rule {
    /// RFC 6901 JSON pointer, e.g. `/data/aweme_detail/desc`.
    Path(&'static str),
    /// Lookup that needs more than a fixed path.
    Custom(fn(&Value) -> Option<&Value>),
}

impl Rule {
    pub fn apply<'a>(&self, payload: &'a Value) -> Option<&'a Value> {
        match self {
            Rule::Path(p) => payload.pointer(p),
            Rule::Custom(f) => f(payload),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Path(p) => write!(f, "Path({p})"),
            Rule::Custom(_) => write!(f, "Custom"),
        }
    }
}

pub const ID: &[Rule] = &[
    Rule::Path("/data/aweme_detail/aweme_id"),
    Rule::Path("/aweme_id"),
    Rule::Path("/id"),
];

pub const TITLE: &[Rule] = &[
    Rule::Path("/data/aweme_detail/desc"),
    Rule::Path("/title"),
    Rule::Path("/desc"),
];

pub const ORIGIN_URL: &[Rule] = &[
    Rule::Path("/data/aweme_detail/share_url"),
    Rule::Path("/share_url"),
    Rule::Path("/url"),
];

pub const DIRECT_MEDIA_URL: &[Rule] = &[
    Rule::Path("/data/aweme_detail/video/play_addr/url_list/0"),
    Rule::Path("/data/aweme_detail/video/play_addr_h264/url_list/0"),
    Rule::Custom(first_bit_rate_url),
    Rule::Path("/video_url"),
    Rule::Path("/video_no_watermark_url_hd"),
    Rule::Path("/video_no_watermark_url"),
    Rule::Path("/download_url"),
    Rule::Path("/url"),
    Rule::Path("/video_download_url"),
    Rule::Path("/play_url"),
    Rule::Path("/data/video_download_url"),
];

pub const COVER_IMAGE: &[Rule] = &[
    Rule::Path("/data/aweme_detail/video/cover/url_list/0"),
    Rule::Path("/cover_url"),
    Rule::Path("/thumbnail_url"),
    Rule::Path("/cover"),
    Rule::Path("/video_cover_url"),
];

pub const DURATION: &[Rule] = &[
    Rule::Path("/data/aweme_detail/video/duration"),
    Rule::Path("/duration"),
    Rule::Path("/video_duration"),
];

pub const SIZE: &[Rule] = &[
    Rule::Path("/data/aweme_detail/video/play_addr/data_size"),
    Rule::Path("/video_size"),
];

/// First `bit_rate` variant with a usable play address.
fn first_bit_rate_url(payload: &Value) -> Option<&Value> {
    payload
        .pointer("/data/aweme_detail/video/bit_rate")?
        .as_array()?
        .iter()
        .filter_map(|variant| variant.pointer("/play_addr/url_list/0"))
        .find(|url| as_text(url).is_some())
}

/// Non-empty strings, or non-zero numbers rendered as text.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Positive integers, from numbers or numeric strings. Fractions are floored.
pub fn as_count(value: &Value) -> Option<u64> {
    let n = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| *f > 0.0).map(|f| f as u64))
        }
        _ => None,
    };
    n.filter(|n| *n > 0)
}

/// First rule in `rules` that yields a value accepted by `convert`.
pub fn first<T>(payload: &Value, rules: &[Rule], convert: fn(&Value) -> Option<T>) -> Option<T> {
    rules
        .iter()
        .filter_map(|rule| rule.apply(payload))
        .find_map(convert)
}
