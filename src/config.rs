use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

/// Environment variable overriding the lore service base URL.
pub const API_URL_ENV: &str = "LORE_API_URL";
/// Prefix for nested overrides, e.g. `LORE_ENGINE_TUI__TICK_RATE_MS=100`.
pub const ENV_PREFIX: &str = "LORE_ENGINE_";
/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub tui: TuiConfig,
    pub export: ExportConfig,
}

/// Lore service connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the generation service.
    pub base_url: String,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Ticks between the entrance of consecutive faction cards.
    pub stagger_ticks: u32,
    /// Ticks a notification stays on screen.
    pub notification_ttl_ticks: u32,
}

/// Export file configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Override the default export directory.
    pub dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            stagger_ticks: 2,
            notification_ttl_ticks: 60,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/lore-engine/config.toml` and the
    /// environment. Returns `Default` if loading fails.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match Self::load_from(&config_path) {
            Ok(config) => {
                log::info!(
                    "Loaded config (file: {}, api: {})",
                    config_path.display(),
                    config.api.base_url
                );
                config
            }
            Err(e) => {
                log::warn!(
                    "Failed to load config at {}: {e}; using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Layer defaults, the TOML file at `path` (if present), prefixed
    /// environment variables and finally `LORE_API_URL`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::figment(path).extract()?;
        Ok(config)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Env::raw().only(&[API_URL_ENV]).map(|_| "api.base_url".into()))
    }

    /// Resolved export directory (override or XDG default).
    pub fn export_dir(&self) -> PathBuf {
        self.export.dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("lore-engine").join("exports"))
                .unwrap_or_else(|| PathBuf::from("exports"))
        })
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("lore-engine").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
