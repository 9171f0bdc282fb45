//! `dyget resolve [TEXT]` – share text to direct video URL.

use anyhow::Result;
use dyget_core::config::DygetConfig;
use dyget_core::{ResolveOutcome, VideoRecord};

use super::{input_text, or_dash, resolver_for};

pub(crate) fn print_record(r: &VideoRecord) {
    println!("Title:    {}", or_dash(r.title()));
    println!("ID:       {}", or_dash(r.id()));
    println!("Duration: {}", or_dash(&r.display_duration()));
    println!("Size:     {}", or_dash(&r.display_size()));
    println!("Cover:    {}", or_dash(r.cover_image()));
    println!("Source:   {}", or_dash(r.origin_url()));
    println!("URL:      {}", r.direct_media_url());
}

pub async fn run_resolve(cfg: &DygetConfig, words: Vec<String>, json: bool) -> Result<()> {
    let text = input_text(words)?;
    let outcome: ResolveOutcome = match resolver_for(cfg, &text) {
        Ok(resolver) => resolver.resolve_outcome_async(&text).await,
        Err(e) => ResolveOutcome::from(Err::<VideoRecord, _>(e)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if let Some(record) = &outcome.data {
        print_record(record);
    }

    match outcome.error {
        Some(error) => {
            tracing::info!("resolve failed: {}", error);
            anyhow::bail!(error)
        }
        None => Ok(()),
    }
}

