//! Server shared state
//!
//! Holds configuration and the geocoder shared by all handlers.

use crate::config::Config;
use crate::error::Result;
use crate::geo::{get_geocoder, google::GoogleBackend};

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// Geocoder built from `config.geocoder`
    pub geocoder: GoogleBackend,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Result<Self> {
        let geocoder = get_geocoder(&config.geocoder)?;
        Ok(Self { config, geocoder })
    }
}
