use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Recommender configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RecommenderConfig {
    /// API key for the completion endpoint; no key means local-only mode
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL for the completion endpoint (for proxies and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Temperature for generation (0.0-2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Catalog JSON file; the bundled catalog is used when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            timeout_ms: default_timeout_ms(),
            catalog: None,
        }
    }
}

// Default value functions
fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_temperature() -> f64 {
    0.4
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl RecommenderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with PRODUCT_CHOICE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// When no key is configured, `OPENAI_API_KEY` is used if present.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = load_config()?;
        if config.api_key.is_none() {
            config.api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        Ok(config)
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Whether a usable credential is present (set and non-blank)
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

/// Load configuration from `config.toml` and `PRODUCT_CHOICE__*` variables
///
/// Environment variable format: PRODUCT_CHOICE__API_KEY, PRODUCT_CHOICE__MODEL
pub fn load_config() -> Result<RecommenderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("PRODUCT_CHOICE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = RecommenderConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.base_url, "https://api.openai.com");
        assert_eq!(config.temperature, 0.4);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.api_key.is_none());
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_has_api_key() {
        let mut config = RecommenderConfig::default();
        assert!(!config.has_api_key());

        config.api_key = Some("   ".to_string());
        assert!(!config.has_api_key());

        config.api_key = Some("sk-test".to_string());
        assert!(config.has_api_key());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "model = \"gpt-4o-mini\"\ntimeout_ms = 1500\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: RecommenderConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout(), Duration::from_millis(1500));
        assert_eq!(config.temperature, 0.4);
        assert!(config.api_key.is_none());
    }
}
