//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::api::GOOGLE_GEOCODE_URL;

/// Default geocoding provider
pub const DEFAULT_PROVIDER: &str = "google";

/// Default provider endpoint
pub const DEFAULT_BASE_URL: &str = GOOGLE_GEOCODE_URL;

/// Default region bias (ccTLD code)
pub const DEFAULT_REGION: &str = "vn";

/// Default result language
pub const DEFAULT_LANGUAGE: &str = "vi";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7979;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default URL provider
pub const DEFAULT_URL_PROVIDER: &str = "google";

/// Environment variable that overrides the configured API key
pub const API_KEY_ENV: &str = "VN_GEOCODER_API_KEY";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "vn-geocoder";
