//! Google Maps Geocoding API backend
//!
//! One GET per call, no retry and no caching. The API key travels in the query
//! string, so request URLs are never logged or surfaced in errors.

use crate::config::GeocoderConfig;
use crate::constants::api::USER_AGENT;
use crate::error::Result;
use crate::geo::{
    GeoBackend, GeocodeFailure, GeocodeResponse, GeocodeResult, ProviderStatus, ADDRESS_REQUIRED,
    API_KEY_REQUIRED,
};
use serde::de::IgnoredAny;
use serde::Deserialize;
use tracing::{debug, warn};

const TRANSPORT_FALLBACK: &str = "Geocoding request failed";

const COUNTRY_TYPES: &[&str] = &["country"];
const STATE_TYPES: &[&str] = &["administrative_area_level_1"];
const CITY_TYPES: &[&str] = &["locality", "administrative_area_level_2"];
const ZIPCODE_TYPES: &[&str] = &["postal_code"];
const STREET_NAME_TYPES: &[&str] = &["route"];
const STREET_NUMBER_TYPES: &[&str] = &["street_number"];
const NEIGHBOURHOOD_TYPES: &[&str] = &["neighborhood", "sublocality"];

/// Google geocoding backend
#[derive(Debug, Clone)]
pub struct GoogleBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    region: Option<String>,
    language: Option<String>,
}

/// Top-level provider response
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    status: String,
    #[serde(default)]
    results: Vec<ProviderMatch>,
    #[serde(default)]
    error_message: Option<String>,
}

/// One entry of `results[]`
#[derive(Debug, Deserialize)]
struct ProviderMatch {
    #[serde(default)]
    formatted_address: String,
    #[serde(default)]
    geometry: Option<Geometry>,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(default)]
    location: Option<Location>,
}

#[derive(Debug, Deserialize)]
struct Location {
    #[serde(default)]
    lat: Option<CoordinateSource>,
    #[serde(default)]
    lng: Option<CoordinateSource>,
}

#[derive(Debug, Deserialize)]
struct AddressComponent {
    #[serde(default)]
    long_name: String,
    #[serde(default)]
    short_name: String,
    #[serde(default)]
    types: Vec<String>,
}

/// A coordinate as the provider sent it
///
/// Either a plain number or a textual form that is parsed once here. Anything
/// else is accepted but never resolves.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CoordinateSource {
    Literal(f64),
    Text(String),
    Unsupported(IgnoredAny),
}

impl CoordinateSource {
    /// Resolve to a finite number, if possible
    pub fn resolve(&self) -> Option<f64> {
        let value = match self {
            Self::Literal(value) => *value,
            Self::Text(text) => text.trim().parse().ok()?,
            Self::Unsupported(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl GoogleBackend {
    /// Create a backend from geocoder settings
    ///
    /// A missing API key is not an error here; each call checks it.
    pub fn new(config: &GeocoderConfig) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.trim().to_string(),
            region: non_empty(&config.region),
            language: non_empty(&config.language),
        })
    }

    /// Whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Build the request URL for one query parameter plus key and bias
    fn build_url(&self, param: &str, value: &str) -> String {
        let mut url = format!(
            "{}?{}={}&key={}",
            self.base_url,
            param,
            urlencoding::encode(value),
            urlencoding::encode(&self.api_key)
        );

        if let Some(region) = &self.region {
            url.push_str(&format!("&region={}", urlencoding::encode(region)));
        }
        if let Some(language) = &self.language {
            url.push_str(&format!("&language={}", urlencoding::encode(language)));
        }

        url
    }

    async fn fetch(&self, url: &str) -> std::result::Result<ProviderResponse, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        response.json::<ProviderResponse>().await
    }

    /// Send one query and fold every outcome into a response
    async fn lookup(&self, param: &str, value: &str) -> GeocodeResponse {
        if !self.has_api_key() {
            return GeocodeResponse::failure(GeocodeFailure::Config, API_KEY_REQUIRED);
        }

        debug!(param, value, "Sending geocode request to {}", self.base_url);

        match self.fetch(&self.build_url(param, value)).await {
            Ok(body) => interpret(body),
            Err(e) => {
                let message = e.without_url().to_string();
                warn!("Geocode request failed: {}", message);
                let message = if message.is_empty() {
                    TRANSPORT_FALLBACK.to_string()
                } else {
                    message
                };
                GeocodeResponse::failure(GeocodeFailure::Transport, message)
            }
        }
    }
}

impl GeoBackend for GoogleBackend {
    fn name(&self) -> &'static str {
        "google"
    }

    async fn geocode(&self, address: &str) -> GeocodeResponse {
        let address = address.trim();
        if address.is_empty() {
            return GeocodeResponse::failure(GeocodeFailure::Input, ADDRESS_REQUIRED);
        }

        self.lookup("address", address).await
    }

    async fn reverse(&self, latitude: f64, longitude: f64) -> GeocodeResponse {
        self.lookup("latlng", &format!("{},{}", latitude, longitude))
            .await
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Map a 2xx provider body to a response
fn interpret(body: ProviderResponse) -> GeocodeResponse {
    let status = ProviderStatus::from_code(&body.status);

    if status == ProviderStatus::Ok && !body.results.is_empty() {
        let results = body.results.iter().map(normalize).collect();
        return GeocodeResponse::success(results, body.status);
    }

    let status = match status {
        ProviderStatus::Ok => ProviderStatus::ZeroResults,
        other => other,
    };

    warn!(
        status = %body.status,
        provider_message = body.error_message.as_deref().unwrap_or(""),
        "Geocode provider reported failure"
    );

    GeocodeResponse::provider_failure(&status, body.status)
}

/// Normalize one provider match
fn normalize(item: &ProviderMatch) -> GeocodeResult {
    let location = item.geometry.as_ref().and_then(|g| g.location.as_ref());
    let latitude = resolve_axis(location.and_then(|l| l.lat.as_ref()), "lat");
    let longitude = resolve_axis(location.and_then(|l| l.lng.as_ref()), "lng");

    let components = &item.address_components;
    let long_name = |types: &[&str]| {
        find_component(components, types)
            .map(|c| c.long_name.clone())
            .unwrap_or_default()
    };

    GeocodeResult {
        latitude,
        longitude,
        formatted_address: item.formatted_address.clone(),
        country: long_name(COUNTRY_TYPES),
        country_code: find_component(components, COUNTRY_TYPES)
            .map(|c| c.short_name.clone())
            .unwrap_or_default(),
        state: long_name(STATE_TYPES),
        city: long_name(CITY_TYPES),
        zipcode: long_name(ZIPCODE_TYPES),
        street_name: long_name(STREET_NAME_TYPES),
        street_number: long_name(STREET_NUMBER_TYPES),
        neighbourhood: long_name(NEIGHBOURHOOD_TYPES),
    }
}

// Unresolved axes default to 0 so the result shape stays fixed.
fn resolve_axis(source: Option<&CoordinateSource>, axis: &str) -> f64 {
    match source.and_then(CoordinateSource::resolve) {
        Some(value) => value,
        None => {
            warn!(axis, "Provider match has no usable coordinate, defaulting to 0");
            0.0
        }
    }
}

fn find_component<'a>(
    components: &'a [AddressComponent],
    types: &[&str],
) -> Option<&'a AddressComponent> {
    components
        .iter()
        .find(|c| c.types.iter().any(|t| types.contains(&t.as_str())))
}
