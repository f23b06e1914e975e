use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::clients::duckduckgo::DUCKDUCKGO_API;
use crate::clients::google::GOOGLE_SEARCH_API;

pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const GOOGLE_CX_ENV: &str = "GOOGLE_CX";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub search: SearchConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/chatterbox.db".to_string(),
            log_level: "info".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Google Custom Search API key. Overridden by `GOOGLE_API_KEY`.
    pub google_api_key: Option<String>,

    /// Google Custom Search engine id. Overridden by `GOOGLE_CX`.
    pub google_cx: Option<String>,

    pub google_base_url: String,

    pub duckduckgo_base_url: String,

    /// Per-call timeout for both providers (default: 10)
    pub request_timeout_seconds: u64,

    /// How long cached results stay fresh (default: 3600)
    pub cache_ttl_seconds: u64,

    /// Results requested per chat message (default: 3)
    pub chat_result_count: usize,

    /// `num_results` used when a search request omits it (default: 5)
    pub default_num_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            google_cx: None,
            google_base_url: GOOGLE_SEARCH_API.to_string(),
            duckduckgo_base_url: DUCKDUCKGO_API.to_string(),
            request_timeout_seconds: 10,
            cache_ttl_seconds: 3600,
            chat_result_count: 3,
            default_num_results: 5,
        }
    }
}

impl SearchConfig {
    /// Both credentials, when present and non-empty.
    #[must_use]
    pub fn google_credentials(&self) -> Option<(&str, &str)> {
        let key = self.google_api_key.as_deref().filter(|k| !k.is_empty())?;
        let cx = self.google_cx.as_deref().filter(|c| !c.is_empty())?;
        Some((key, cx))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,

    pub loki_enabled: bool,

    pub loki_url: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
            loki_enabled: false,
            loki_url: "http://localhost:3100".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            server: ServerConfig::default(),
            search: SearchConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_dotenv();

        let paths = Self::config_paths();

        let mut config = None;
        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                config = Some(Self::load_from_path(path)?);
                break;
            }
        }

        let mut config = config.unwrap_or_else(|| {
            info!("No config file found, using defaults");
            Self::default()
        });
        config.apply_env_overrides();
        Ok(config)
    }

    fn load_dotenv() {
        if let Some(e) = Self::dotenv_failure(dotenvy::dotenv()) {
            warn!("Ignoring .env file: {}", e);
        }
    }

    /// A missing `.env` is normal; an unreadable or malformed one is not.
    fn dotenv_failure(result: dotenvy::Result<PathBuf>) -> Option<dotenvy::Error> {
        match result {
            Ok(path) => {
                info!("Loaded environment from {}", path.display());
                None
            }
            Err(e) if e.not_found() => None,
            Err(e) => Some(e),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Provider credentials from the environment win over the file.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(GOOGLE_API_KEY_ENV) {
            self.search.google_api_key = Some(key);
        }
        if let Ok(cx) = std::env::var(GOOGLE_CX_ENV) {
            self.search.google_cx = Some(cx);
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("chatterbox").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".chatterbox").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.cache_ttl_seconds == 0 {
            anyhow::bail!("search.cache_ttl_seconds must be > 0");
        }

        if self.search.request_timeout_seconds == 0 {
            anyhow::bail!("search.request_timeout_seconds must be > 0");
        }

        if self.search.chat_result_count == 0 {
            anyhow::bail!("search.chat_result_count must be > 0");
        }

        Ok(())
    }
}
