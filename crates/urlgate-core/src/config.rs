use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Forwarder transport knobs (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardConfig {
    /// Connection timeout in seconds for outbound requests.
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum response body bytes kept; anything past this is discarded.
    pub max_response_bytes: u64,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_response_bytes: 4 * 1024 * 1024,
        }
    }
}

/// Global configuration loaded from `~/.config/urlgate/config.toml`.
///
/// The trusted domain set and default URLs materialize the gateway's fixed
/// allowlist; they are read once at startup and the resulting `UrlPolicy`
/// is immutable for the life of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlgateConfig {
    /// Exact hostnames the gateway may contact. No wildcard or subdomain
    /// matching is applied to these.
    pub trusted_domains: Vec<String>,
    /// Substituted for any candidate URL that fails validation.
    pub safe_default_url: String,
    /// Last-resort destination if sanitization yields an empty string.
    pub fallback_default_url: String,
    /// Optional forwarder transport settings; built-in defaults if missing.
    #[serde(default)]
    pub forward: Option<ForwardConfig>,
}

impl Default for UrlgateConfig {
    fn default() -> Self {
        Self {
            trusted_domains: vec![
                "api.analytics.com".to_string(),
                "analytics-service.internal".to_string(),
                "collector.analytics.net".to_string(),
                "data.analytics.io".to_string(),
                "metrics.company.com".to_string(),
                "reporting.internal".to_string(),
                "dashboard.analytics.org".to_string(),
            ],
            safe_default_url: "https://api.analytics.com/health".to_string(),
            fallback_default_url: "https://api.analytics.com/default".to_string(),
            forward: None,
        }
    }
}

impl UrlgateConfig {
    /// Forwarder settings with defaults applied.
    pub fn forward_config(&self) -> ForwardConfig {
        self.forward.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlgate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlgateConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlgateConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlgateConfig = toml::from_str(&data)?;
    Ok(cfg)
}
