//! `dyget extract [TEXT]` – find the link and id locally, no network.

use anyhow::Result;
use dyget_core::service::{self, ExtractionResult};

use super::input_text;

/// The `{found, url, error}` view of [`service::prepare`], so both output
/// modes accept and reject the same input.
pub(crate) fn extraction_result(text: &str) -> ExtractionResult {
    service::prepare(text).map(|(share, _id)| share.url).into()
}

pub fn run_extract(words: Vec<String>, json: bool) -> Result<()> {
    let text = input_text(words)?;

    if json {
        let result = extraction_result(&text);
        println!("{}", serde_json::to_string_pretty(&result)?);
        if let Some(error) = result.error {
            anyhow::bail!(error);
        }
        return Ok(());
    }

    let (share, id) = service::prepare(&text)?;
    println!("Link: {}", share.url);
    println!("ID:   {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_link_found_in_json_view() {
        let result = extraction_result("v.douyin.com/abc123/");
        assert!(result.found);
        assert_eq!(result.url.as_deref(), Some("https://v.douyin.com/abc123/"));
        assert!(service::prepare("v.douyin.com/abc123/").is_ok());
    }

    #[test]
    fn json_view_reports_same_errors() {
        assert_eq!(extraction_result("nothing here").error.as_deref(), Some("invalid link"));
        assert_eq!(
            extraction_result("https://www.douyin.com/").error.as_deref(),
            Some(service::prepare("https://www.douyin.com/").unwrap_err().to_string().as_str())
        );
    }
}
