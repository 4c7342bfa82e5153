//! URL output formatter

use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::format::OutputFormatter;
use crate::geo::GeocodeResponse;
use crate::validate::ValidationResult;

/// URL formatter - outputs a map URL for the best match
pub struct UrlFormatter;

impl UrlFormatter {
    /// Format URL with optional provider override
    pub fn format_with_provider(
        &self,
        response: &GeocodeResponse,
        config: &Config,
        provider: Option<&str>,
    ) -> Result<String> {
        match response.first() {
            Some(best) => config.format_url(provider, best.latitude, best.longitude),
            None => Err(Error::Geocoding(
                response
                    .error
                    .clone()
                    .unwrap_or_else(|| "No geocoding result".to_string()),
            )),
        }
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URL for the best match"
    }

    fn format_geocode(&self, response: &GeocodeResponse, config: &Config) -> Result<String> {
        self.format_with_provider(response, config, None)
    }

    fn format_validation(
        &self,
        coords: Coordinates,
        _result: &ValidationResult,
        config: &Config,
    ) -> Result<String> {
        config.format_url(None, coords.lat, coords.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::sample_response;
    use crate::geo::{GeocodeFailure, ProviderStatus};
    use crate::validate::validate_vietnam_coordinates;

    #[test]
    fn test_url_format_default_provider() {
        let output = UrlFormatter
            .format_geocode(&sample_response(), &Config::default())
            .unwrap();
        assert!(output.contains("google.com/maps"));
        assert!(output.contains("10.7717,106.7041"));
    }

    #[test]
    fn test_url_format_with_provider() {
        let output = UrlFormatter
            .format_with_provider(&sample_response(), &Config::default(), Some("openstreetmap"))
            .unwrap();
        assert!(output.starts_with("https://www.openstreetmap.org/"));
        assert!(output.contains("mlat=10.7717"));
    }

    #[test]
    fn test_url_format_failed_response() {
        let response =
            GeocodeResponse::provider_failure(&ProviderStatus::ZeroResults, "ZERO_RESULTS");
        let err = UrlFormatter
            .format_geocode(&response, &Config::default())
            .unwrap_err();
        assert!(matches!(err, Error::Geocoding(_)));

        let response = GeocodeResponse::failure(GeocodeFailure::Config, "API key is required");
        assert!(UrlFormatter
            .format_geocode(&response, &Config::default())
            .is_err());
    }

    #[test]
    fn test_url_validation() {
        let coords = Coordinates::new(16.0544, 108.2022);
        let result = validate_vietnam_coordinates(coords.lat, coords.lng, None);
        let output = UrlFormatter
            .format_validation(coords, &result, &Config::default())
            .unwrap();
        assert!(output.ends_with("16.0544,108.2022"));
    }
}
