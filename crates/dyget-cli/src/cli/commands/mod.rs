//! CLI command handlers, one per file.

mod completions;
mod config;
mod extract;
mod info;
mod resolve;

pub use completions::run_completions;
pub use config::run_config;
pub use extract::run_extract;
pub use info::run_info;
pub use resolve::run_resolve;

use anyhow::{Context, Result};
use dyget_core::config::DygetConfig;
use dyget_core::{service, ResolutionClient, ResolveError, VideoResolver};
use std::io::Read;

/// Joins positional words, or reads all of stdin when there are none
/// (`pbpaste | dyget resolve`).
pub(crate) fn input_text(words: Vec<String>) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("read share text from stdin")?;
    Ok(text)
}

/// Checks `text` locally before building the client, so a bad link is
/// reported ahead of a missing API key.
pub(crate) fn resolver_for(
    cfg: &DygetConfig,
    text: &str,
) -> Result<VideoResolver<ResolutionClient>, ResolveError> {
    service::prepare(text)?;
    Ok(VideoResolver::new(ResolutionClient::from_config(cfg)?))
}

/// `-` for fields the upstream left empty.
pub(crate) fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_text_joins_words() {
        let words = vec!["看看".to_string(), "https://v.douyin.com/abc123/".to_string()];
        assert_eq!(input_text(words).unwrap(), "看看 https://v.douyin.com/abc123/");
    }

    #[test]
    fn resolver_for_reports_local_errors_first() {
        let no_key = DygetConfig::default();
        assert_eq!(
            resolver_for(&no_key, "no link here").err(),
            Some(ResolveError::InvalidLink)
        );
        assert_eq!(resolver_for(&no_key, "   ").err(), Some(ResolveError::InputEmpty));
        assert_eq!(
            resolver_for(&no_key, "https://v.douyin.com/abc123/").err(),
            Some(ResolveError::MissingApiKey)
        );
    }

    #[test]
    fn resolver_for_builds_with_key() {
        let cfg = DygetConfig {
            api_key: Some("k".into()),
            ..DygetConfig::default()
        };
        assert!(resolver_for(&cfg, "https://v.douyin.com/abc123/").is_ok());
    }

    #[test]
    fn or_dash_fills_empty() {
        assert_eq!(or_dash(""), "-");
        assert_eq!(or_dash("02:05"), "02:05");
    }
}
