//! CLI for dyget.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use dyget_core::config;

use commands::{run_completions, run_config, run_extract, run_info, run_resolve};

/// Top-level CLI for dyget.
#[derive(Debug, Parser)]
#[command(name = "dyget")]
#[command(about = "dyget: resolve Douyin share links to no-watermark video URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve share text (or a bare link) to a direct video URL.
    Resolve {
        /// Share text as copied from the app; read from stdin when omitted.
        text: Vec<String>,
        /// Print the `{success, data, error}` envelope as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the link and video id found in share text, without calling the API.
    Extract {
        /// Share text; read from stdin when omitted.
        text: Vec<String>,
        /// Print the `{found, url, error}` result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show title, cover, duration and size only.
    Info {
        /// Share text; read from stdin when omitted.
        text: Vec<String>,
    },

    /// Show the config file path and effective settings.
    Config,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve { text, json } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: endpoint={}", cfg.endpoint);
                run_resolve(&cfg, text, json).await?
            }
            CliCommand::Extract { text, json } => run_extract(text, json)?,
            CliCommand::Info { text } => {
                let cfg = config::load_or_init()?;
                run_info(&cfg, text).await?
            }
            CliCommand::Config => run_config()?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
