use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Settings for talking to the Spoonacular API
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// API key sent with every request as the `apiKey` query parameter
    pub api_key: Option<String>,
    /// Base URL of the API, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Number of results requested per search
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_page_size() -> u32 {
    10
}

fn default_timeout() -> u64 {
    30
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested keys: RECIPE_FINDER__API_KEY
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
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
        assert_eq!(default_base_url(), "https://api.spoonacular.com");
        assert_eq!(default_page_size(), 10);
        assert_eq!(default_timeout(), 30);
    }

    #[test]
    fn test_finder_config_default() {
        let config = FinderConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "api_key = \"abc\"\ntimeout = 5",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: FinderConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.timeout, 5);
        assert_eq!(config.base_url, "https://api.spoonacular.com");
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_missing_optional_file_falls_back_to_defaults() {
        let settings = Config::builder()
            .add_source(File::with_name("does-not-exist/config").required(false))
            .build()
            .unwrap();
        let config: FinderConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, "https://api.spoonacular.com");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
