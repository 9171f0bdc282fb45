pub mod config;
pub mod logging;

pub mod client;
pub mod error;
pub mod format;
pub mod link;
pub mod mapper;
pub mod service;

pub use client::{ResolutionClient, Upstream};
pub use error::ResolveError;
pub use mapper::VideoRecord;
pub use service::{ExtractionResult, ResolveOutcome, VideoResolver, VideoSummary};
