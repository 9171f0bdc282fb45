//! `dyget config` – where the config lives and what is in effect.

use anyhow::Result;
use dyget_core::{config, logging};

pub fn run_config() -> Result<()> {
    let path = config::config_path()?;
    let cfg = config::load_or_init()?;
    println!("Config file: {}", path.display());
    println!("Log file:    {}", logging::log_file_path()?.display());
    println!("endpoint     = {}", cfg.endpoint);
    println!("api_key      = {}", cfg.masked_api_key());
    println!(
        "timeout_secs = {}",
        cfg.timeout_secs
            .map(|t| t.to_string())
            .unwrap_or_else(|| "(transport default)".to_string())
    );
    println!(
        "user_agent   = {}",
        cfg.user_agent.as_deref().unwrap_or("(libcurl default)")
    );
    if std::env::var_os(config::API_KEY_ENV).is_some() {
        println!("(api_key taken from {})", config::API_KEY_ENV);
    }
    Ok(())
}
