//! `dyget info [TEXT]` – title, cover, duration and size without the media URL.

use anyhow::Result;
use dyget_core::config::DygetConfig;
use dyget_core::VideoSummary;

use super::{input_text, or_dash, resolver_for};

pub async fn run_info(cfg: &DygetConfig, words: Vec<String>) -> Result<()> {
    let text = input_text(words)?;
    let resolver = resolver_for(cfg, &text)?;
    let record = resolver.resolve_video_async(&text).await?;
    let summary = VideoSummary::from(&record);
    println!("Title:    {}", or_dash(&summary.title));
    println!("Duration: {}", or_dash(&summary.duration));
    println!("Size:     {}", or_dash(&summary.size));
    println!("Cover:    {}", or_dash(&summary.cover_image));
    Ok(())
}
