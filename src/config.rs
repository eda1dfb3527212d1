//! Layered application configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file, then `MARQUEE_*` environment variables with `__` separating
//! sections (for example `MARQUEE_CATALOG__API_TOKEN`).

use crate::catalog::CacheConfig as DetailCacheConfig;
use crate::error::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use validator::Validate;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "MARQUEE_CONFIG";

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub server: ServerConfig,
    #[validate(nested)]
    pub catalog: CatalogConfig,
    #[validate(nested)]
    pub search: SearchConfig,
    #[validate(nested)]
    pub analytics: AnalyticsConfig,
    #[validate(nested)]
    pub cache: CacheConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct CatalogConfig {
    #[validate(url)]
    pub base_url: String,
    #[validate(url)]
    pub image_base: String,
    #[validate(length(min = 1))]
    pub poster_size: String,
    pub placeholder_poster: String,
    /// Bearer token for the catalog API
    pub api_token: String,
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            image_base: "https://image.tmdb.org/t/p".to_string(),
            poster_size: "w500".to_string(),
            placeholder_poster: "/No-Movie-Poster.png".to_string(),
            api_token: String::new(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before typed input is committed
    #[validate(range(min = 100, max = 5000))]
    pub debounce_ms: u64,
    /// Results per catalog page
    #[validate(range(min = 1, max = 100))]
    pub page_size: u32,
}

impl SearchConfig {
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            page_size: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct AnalyticsConfig {
    #[validate(length(min = 1))]
    pub database_url: String,
    #[validate(range(min = 1, max = 100))]
    pub trending_limit: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        let path = dirs::data_dir().map_or_else(
            || PathBuf::from("analytics.db"),
            |dir| dir.join("marquee").join("analytics.db"),
        );

        Self {
            database_url: format!("sqlite://{}", path.display()),
            trending_limit: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    #[validate(range(min = 1))]
    pub detail_max_entries: u64,
    #[validate(range(min = 1))]
    pub detail_ttl_secs: u64,
}

impl CacheConfig {
    #[must_use]
    pub fn detail_cache(&self) -> DetailCacheConfig {
        DetailCacheConfig {
            detail_max_entries: self.detail_max_entries,
            detail_ttl: Duration::from_secs(self.detail_ttl_secs),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        let defaults = DetailCacheConfig::default();
        Self {
            enabled: false,
            detail_max_entries: defaults.detail_max_entries,
            detail_ttl_secs: defaults.detail_ttl.as_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    pub json: bool,
    /// Directory for a daily rolling log file
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            directory: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `MARQUEE_CONFIG` or `./marquee.toml`
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).ok();
        Self::load_from(path.as_deref())
    }

    /// Load configuration, reading `path` as a required TOML file if given
    pub fn load_from(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(p) => File::with_name(p).required(true),
            None => File::with_name("marquee").required(false),
        };

        let config: Self = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("MARQUEE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}
