//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/vn-geocoder/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Geocoding provider settings
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// CLI output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Map URL settings
    #[serde(default)]
    pub url: UrlConfig,
}

/// Geocoding provider settings
///
/// Fixed for the lifetime of a geocoder built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Provider identifier
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Provider API key (empty means not configured)
    #[serde(default)]
    pub api_key: String,

    /// Region bias code; empty disables it
    #[serde(default = "default_region")]
    pub region: String,

    /// Preferred result language; empty disables it
    #[serde(default = "default_language")]
    pub language: String,

    /// Provider endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// CLI output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// URL generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Default URL provider
    #[serde(default = "default_url_provider")]
    pub default: String,

    /// URL provider templates
    #[serde(default = "default_url_providers")]
    pub providers: HashMap<String, String>,
}

// Default value functions for serde
fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}
fn default_region() -> String {
    DEFAULT_REGION.to_string()
}
fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_url_provider() -> String {
    DEFAULT_URL_PROVIDER.to_string()
}
fn default_url_providers() -> HashMap<String, String> {
    let mut providers = HashMap::new();
    providers.insert(
        "google".to_string(),
        "https://www.google.com/maps/search/?api=1&query={lat},{lng}".to_string(),
    );
    providers.insert(
        "openstreetmap".to_string(),
        "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=17/{lat}/{lng}".to_string(),
    );
    providers.insert(
        "apple".to_string(),
        "https://maps.apple.com/?ll={lat},{lng}".to_string(),
    );
    providers
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: String::new(),
            region: default_region(),
            language: default_language(),
            base_url: default_base_url(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            default: default_url_provider(),
            providers: default_url_providers(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Apply environment overrides (`VN_GEOCODER_API_KEY`)
    pub fn apply_env(&mut self) {
        self.override_api_key(std::env::var(API_KEY_ENV).ok());
    }

    fn override_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.geocoder.api_key = key.trim().to_string();
        }
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["geocoder", "provider"] => Some(self.geocoder.provider.clone()),
            ["geocoder", "api_key"] => Some(self.geocoder.api_key.clone()),
            ["geocoder", "region"] => Some(self.geocoder.region.clone()),
            ["geocoder", "language"] => Some(self.geocoder.language.clone()),
            ["geocoder", "base_url"] => Some(self.geocoder.base_url.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["output", "format"] => Some(self.output.format.clone()),

            ["url", "default"] => Some(self.url.default.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["geocoder", "provider"] => {
                self.geocoder.provider = value.to_string();
            }
            ["geocoder", "api_key"] => {
                self.geocoder.api_key = value.trim().to_string();
            }
            ["geocoder", "region"] => {
                self.geocoder.region = value.to_string();
            }
            ["geocoder", "language"] => {
                self.geocoder.language = value.to_string();
            }
            ["geocoder", "base_url"] => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    return Err(Error::Config(format!("Invalid base URL: {}", value)));
                }
                self.geocoder.base_url = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid port value: {}", value)))?;
            }

            ["output", "format"] => {
                if crate::format::get_formatter(value).is_none() {
                    return Err(Error::Config(format!("Unknown format: {}", value)));
                }
                self.output.format = value.to_lowercase();
            }

            ["url", "default"] => {
                if !self.url.providers.contains_key(value) {
                    return Err(Error::Config(format!("Unknown URL provider: {}", value)));
                }
                self.url.default = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "geocoder.provider",
            "geocoder.api_key",
            "geocoder.region",
            "geocoder.language",
            "geocoder.base_url",
            "server.host",
            "server.port",
            "output.format",
            "url.default",
        ]
    }

    /// Format a URL using the specified provider
    ///
    /// Replaces {lat} and {lng} placeholders with actual values
    pub fn format_url(&self, provider: Option<&str>, lat: f64, lng: f64) -> Result<String> {
        let provider_name = provider.unwrap_or(&self.url.default);

        let template = self
            .url
            .providers
            .get(provider_name)
            .ok_or_else(|| Error::Config(format!("Unknown URL provider: {}", provider_name)))?;

        Ok(template
            .replace("{lat}", &lat.to_string())
            .replace("{lng}", &lng.to_string()))
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    fn with_temp_config<F: FnOnce()>(f: F) {
        let temp_dir = TempDir::new().unwrap();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        f();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.geocoder.provider, "google");
        assert!(config.geocoder.api_key.is_empty());
        assert_eq!(config.geocoder.region, "vn");
        assert_eq!(config.geocoder.language, "vi");
        assert_eq!(config.server.port, 7979);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("geocoder.region"), Some("vn".to_string()));

        config.set("geocoder.region", "us").unwrap();
        assert_eq!(config.get("geocoder.region"), Some("us".to_string()));

        config.set("server.port", "8080").unwrap();
        assert_eq!(config.server.port, 8080);

        config.set("output.format", "JSON").unwrap();
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_values() {
        let mut config = Config::default();
        assert!(config.set("server.port", "not_a_number").is_err());
        assert!(config.set("output.format", "yaml").is_err());
        assert!(config.set("url.default", "bing").is_err());
        assert!(config.set("geocoder.base_url", "ftp://example").is_err());
    }

    #[test]
    fn test_api_key_override() {
        let mut config = Config::default();
        config.geocoder.api_key = "from-file".to_string();

        config.override_api_key(None);
        assert_eq!(config.geocoder.api_key, "from-file");

        config.override_api_key(Some("   ".to_string()));
        assert_eq!(config.geocoder.api_key, "from-file");

        config.override_api_key(Some(" from-env ".to_string()));
        assert_eq!(config.geocoder.api_key, "from-env");
    }

    #[test]
    fn test_format_url() {
        let config = Config::default();

        let url = config.format_url(Some("apple"), 10.7717, 106.7041).unwrap();
        assert_eq!(url, "https://maps.apple.com/?ll=10.7717,106.7041");

        let url = config.format_url(None, 21.0285, 105.8542).unwrap();
        assert_eq!(
            url,
            "https://www.google.com/maps/search/?api=1&query=21.0285,105.8542"
        );
    }

    #[test]
    fn test_format_url_unknown_provider() {
        let config = Config::default();
        assert!(config.format_url(Some("unknown"), 10.0, 106.0).is_err());
    }

    #[test]
    fn test_save_and_load() {
        with_temp_config(|| {
            let mut config = Config::default();
            config.geocoder.api_key = "abc123".to_string();
            config.server.port = 9000;
            config.save().unwrap();

            let loaded = Config::load().unwrap();
            assert_eq!(loaded.geocoder.api_key, "abc123");
            assert_eq!(loaded.server.port, 9000);
        });
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded: Config = toml::from_str("[geocoder]\napi_key = \"k\"\n").unwrap();
        assert_eq!(loaded.geocoder.api_key, "k");
        assert_eq!(loaded.geocoder.region, "vn");
        assert_eq!(loaded.geocoder.base_url, DEFAULT_BASE_URL);
        assert_eq!(loaded.server.port, 7979);
        assert!(loaded.url.providers.contains_key("google"));
    }

    #[test]
    fn test_serialization_format() {
        let toml = toml::to_string_pretty(&Config::default()).unwrap();

        assert!(toml.contains("[geocoder]"));
        assert!(toml.contains("[server]"));
        assert!(toml.contains("[output]"));
        assert!(toml.contains("[url.providers]"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:7979");
    }

    #[test]
    fn test_available_keys_are_gettable() {
        let config = Config::default();
        for key in Config::available_keys() {
            assert!(config.get(key).is_some(), "{} not readable", key);
        }
    }

    #[test]
    fn test_unreadable_config_is_config_error() {
        with_temp_config(|| {
            let path = Config::config_path().unwrap();
            fs::create_dir_all(&path).unwrap();

            let err = Config::load().unwrap_err();
            assert!(matches!(err, Error::Config(_)), "got {:?}", err);
            assert!(err.to_string().contains("Failed to read config file"));
        });
    }
}
