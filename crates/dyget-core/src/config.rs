use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default resolution endpoint (TikHub, share-URL lookup).
pub const DEFAULT_ENDPOINT: &str =
    "https://api.tikhub.io/api/v1/douyin/web/fetch_one_video_by_share_url";

/// Environment variable that overrides `api_key` from the config file.
pub const API_KEY_ENV: &str = "DYGET_API_KEY";

/// Global configuration loaded from `~/.config/dyget/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DygetConfig {
    /// Resolution API endpoint; the share URL is appended as `?share_url=`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Bearer credential for the resolution API. Never hard-coded; set it here
    /// or through `DYGET_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Optional request timeout in seconds (None = libcurl default, no timeout).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Optional User-Agent sent with the request.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for DygetConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl DygetConfig {
    /// Replaces `api_key` when `key` is present and non-blank.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        match self.api_key.as_deref() {
            None | Some("") => "(unset)".to_string(),
            Some(key) => {
                let chars: Vec<char> = key.chars().collect();
                let shown = chars.len().min(4);
                let tail: String = chars[chars.len() - shown..].iter().collect();
                format!("{}{}", "*".repeat(chars.len() - shown), tail)
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dyget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`, creating a default file if none exists.
pub fn load_or_init_at(path: &Path) -> Result<DygetConfig> {
    if !path.exists() {
        let default_cfg = DygetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: DygetConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from the XDG config dir and apply `DYGET_API_KEY`.
pub fn load_or_init() -> Result<DygetConfig> {
    let path = config_path()?;
    let cfg = load_or_init_at(&path)?;
    Ok(cfg.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
}
