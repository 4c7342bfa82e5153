//! Geocoding module
//!
//! Turns free-text addresses into coordinates (and back) through an external
//! provider, normalizing the provider's response into [`GeocodeResponse`].

pub mod google;
pub mod status;

pub use status::{GeocodeFailure, ProviderStatus};

use crate::config::GeocoderConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Message returned when the address is empty or blank
pub const ADDRESS_REQUIRED: &str = "Address is required";

/// Message returned when no API key is configured
pub const API_KEY_REQUIRED: &str = "API key is required";

/// One provider match, normalized
///
/// Descriptive fields are empty strings when the provider did not supply them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub street_name: String,
    #[serde(default)]
    pub street_number: String,
    #[serde(default)]
    pub neighbourhood: String,
}

/// Envelope returned by every geocode/reverse call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub success: bool,
    pub results: Vec<GeocodeResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Raw provider status, kept for diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<GeocodeFailure>,
}

impl GeocodeResponse {
    /// A successful lookup
    pub fn success(results: Vec<GeocodeResult>, status: impl Into<String>) -> Self {
        Self {
            success: true,
            results,
            error: None,
            status: Some(status.into()),
            failure: None,
        }
    }

    /// A failed lookup with no provider status
    pub fn failure(failure: GeocodeFailure, error: impl Into<String>) -> Self {
        Self {
            success: false,
            results: Vec::new(),
            error: Some(error.into()),
            status: None,
            failure: Some(failure),
        }
    }

    /// A lookup the provider answered with a failure status
    pub fn provider_failure(status: &ProviderStatus, raw_status: impl Into<String>) -> Self {
        Self {
            success: false,
            results: Vec::new(),
            error: Some(status.message()),
            status: Some(raw_status.into()),
            failure: Some(GeocodeFailure::Provider),
        }
    }

    /// Best match, if any
    pub fn first(&self) -> Option<&GeocodeResult> {
        self.results.first()
    }
}

/// Trait for geocoding backends
///
/// Failures never surface as `Err`: they come back as a response with
/// `success = false`.
pub trait GeoBackend: Send + Sync {
    /// Provider identifier (e.g., "google")
    fn name(&self) -> &'static str;

    /// Geocode a free-text address to coordinates
    fn geocode(&self, address: &str) -> impl std::future::Future<Output = GeocodeResponse> + Send;

    /// Reverse geocode a coordinate pair to addresses
    fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> impl std::future::Future<Output = GeocodeResponse> + Send;
}

/// Build the geocoder named by `config.provider`
pub fn get_geocoder(config: &GeocoderConfig) -> Result<google::GoogleBackend> {
    match config.provider.to_lowercase().as_str() {
        "google" => google::GoogleBackend::new(config),
        other => Err(Error::Config(format!("Unknown geocoding provider: {}", other))),
    }
}
