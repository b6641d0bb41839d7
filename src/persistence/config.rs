use crate::store::normalize_base_url;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Task store used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://todo-fast-app.onrender.com/";

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "fasttodo=info";

/// App configuration stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Use emoji checkboxes in the task list
    #[serde(default = "default_use_emoji")]
    pub use_emoji: bool,
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid url")
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn default_use_emoji() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            log_filter: default_log_filter(),
            use_emoji: default_use_emoji(),
        }
    }
}

impl AppConfig {
    /// Apply a command-line / environment base url on top of the file value
    pub fn with_base_url(mut self, base_url: Option<Url>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self.base_url = normalize_base_url(self.base_url);
        self
    }
}

/// Load config from config.json, falling back to defaults when absent
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: AppConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(config)
}

/// Save config to config.json
pub fn save_config<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}

/// Write a fresh config file, refusing to clobber an existing one
pub fn init_config<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        anyhow::bail!("Config file already exists: {}", path.display());
    }
    save_config(path, config)
}
