use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::ApiSettings;
use crate::pipeline::NamingConfig;
use crate::prompt::PromptOptions;
use crate::retry::RetryPolicy;

/// Endpoint written into a fresh config file.
pub const DEFAULT_ENDPOINT: &str = "https://api.siliconflow.cn/v1/chat/completions";

/// Environment variables that override the file at load time.
pub const ENV_API_KEY: &str = "RRN_API_KEY";
pub const ENV_ENDPOINT: &str = "RRN_API_ENDPOINT";
pub const ENV_MODEL: &str = "RRN_MODEL";

/// Chat-completion endpoint settings (`[api]`).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub model: String,
    /// Per-attempt timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            model: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &mask_key(&self.api_key))
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Retry policy parameters (optional `[retry]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Base delay in milliseconds between attempts; 0 retries immediately.
    #[serde(default)]
    pub base_delay_ms: u64,
    /// Maximum backoff delay in milliseconds.
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

fn default_max_delay_ms() -> u64 {
    30_000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 0,
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(c: &RetryConfig) -> Self {
        RetryPolicy {
            max_attempts: c.max_attempts,
            base_delay: Duration::from_millis(c.base_delay_ms),
            max_delay: Duration::from_millis(c.max_delay_ms),
        }
    }
}

/// Global configuration loaded from `~/.config/rrn/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrnConfig {
    #[serde(default)]
    pub api: ApiConfig,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
    #[serde(default)]
    pub prompt: PromptOptions,
}

impl RrnConfig {
    /// Replaces the given API settings (trimmed). `None` leaves a field as is.
    pub fn update(&mut self, endpoint: Option<&str>, api_key: Option<&str>, model: Option<&str>) {
        if let Some(v) = endpoint {
            self.api.endpoint = v.trim().to_string();
        }
        if let Some(v) = api_key {
            self.api.api_key = v.trim().to_string();
        }
        if let Some(v) = model {
            self.api.model = v.trim().to_string();
        }
    }

    /// Applies `RRN_*` overrides looked up through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let endpoint = get(ENV_ENDPOINT);
        let api_key = get(ENV_API_KEY);
        let model = get(ENV_MODEL);
        self.update(endpoint.as_deref(), api_key.as_deref(), model.as_deref());
    }

    /// Immutable per-call configuration for the naming pipeline.
    pub fn naming_config(&self) -> Result<NamingConfig> {
        if self.api.endpoint.is_empty() {
            anyhow::bail!("API endpoint is not configured (rrn config set --endpoint <url>)");
        }
        if self.api.model.is_empty() {
            anyhow::bail!("model is not configured (rrn config set --model <name>)");
        }
        if self.api.api_key.is_empty() {
            tracing::warn!("API key is empty; requests are sent without credentials");
        }
        Ok(NamingConfig {
            api: ApiSettings {
                endpoint: self.api.endpoint.clone(),
                api_key: self.api.api_key.clone(),
                model: self.api.model.clone(),
                timeout: Duration::from_secs(self.api.timeout_secs),
            },
            retry: self
                .retry
                .as_ref()
                .map(RetryPolicy::from)
                .unwrap_or_default(),
            prompt: self.prompt.clone(),
        })
    }
}

/// `sk-abcdef123456` → `sk-a…3456`; short keys are fully masked.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rrn")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk (creating a default file if none exists),
/// then apply environment overrides.
pub fn load_or_init() -> Result<RrnConfig> {
    let mut cfg = load_file_or_init(&config_path()?)?;
    cfg.apply_env_overrides(|name| std::env::var(name).ok());
    Ok(cfg)
}

/// Load configuration from `path`, creating a default file if none exists.
pub fn load_file_or_init(path: &Path) -> Result<RrnConfig> {
    if !path.exists() {
        let default_cfg = RrnConfig::default();
        save_to(path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: RrnConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Write `cfg` to `path`.
pub fn save_to(path: &Path, cfg: &RrnConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}
