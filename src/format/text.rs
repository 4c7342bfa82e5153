//! Human-readable text output formatter

use crate::config::Config;
use crate::coord::{format_coordinates, Coordinates};
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::geo::{GeocodeResponse, GeocodeResult};
use crate::validate::ValidationResult;

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

impl TextFormatter {
    fn push_result(output: &mut String, index: usize, result: &GeocodeResult) {
        output.push_str(&format!("{}. {}\n", index + 1, result.formatted_address));
        output.push_str(&format!(
            "   Coordinates: {}\n",
            format_coordinates(result.latitude, result.longitude)
        ));

        let fields = [
            ("Street", join_street(result)),
            ("Neighbourhood", result.neighbourhood.clone()),
            ("City", result.city.clone()),
            ("State", result.state.clone()),
            ("Zipcode", result.zipcode.clone()),
        ];
        for (label, value) in fields {
            if !value.is_empty() {
                output.push_str(&format!("   {}: {}\n", label, value));
            }
        }

        if !result.country.is_empty() {
            output.push_str(&format!(
                "   Country: {} ({})\n",
                result.country, result.country_code
            ));
        }
    }
}

fn join_street(result: &GeocodeResult) -> String {
    [result.street_number.as_str(), result.street_name.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format_geocode(&self, response: &GeocodeResponse, _config: &Config) -> Result<String> {
        let mut output = String::new();

        if !response.success {
            output.push_str(&format!(
                "Geocoding failed: {}\n",
                response.error.as_deref().unwrap_or("unknown error")
            ));
            if let Some(status) = &response.status {
                output.push_str(&format!("Provider status: {}\n", status));
            }
            return Ok(output);
        }

        output.push_str(&format!("Found {} result(s)\n\n", response.results.len()));
        for (i, result) in response.results.iter().enumerate() {
            Self::push_result(&mut output, i, result);
        }

        Ok(output)
    }

    fn format_validation(
        &self,
        coords: Coordinates,
        result: &ValidationResult,
        _config: &Config,
    ) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("Coordinates: {}\n", coords));
        output.push_str(&format!(
            "Status: {}\n",
            if result.is_valid() { "VALID" } else { "CHECK" }
        ));

        if let (Some(city), Some(distance)) = (result.nearest_city(), result.distance_from_city()) {
            output.push_str(&format!(
                "Nearest city: {} ({:.1} km)\n",
                city,
                distance / 1000.0
            ));
        }

        if !result.warnings().is_empty() {
            output.push_str("\nWarnings:\n");
            for warning in result.warnings() {
                output.push_str(&format!("  - {}\n", warning));
            }
        }

        if !result.suggestions().is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in result.suggestions() {
                output.push_str(&format!("  - {}\n", suggestion));
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::sample_response;
    use crate::geo::{GeocodeFailure, ProviderStatus};
    use crate::validate::validate_vietnam_coordinates;

    #[test]
    fn test_text_geocode() {
        let output = TextFormatter
            .format_geocode(&sample_response(), &Config::default())
            .unwrap();

        assert!(output.contains("Found 1 result(s)"));
        assert!(output.contains("Coordinates: 10.771700, 106.704100"));
        assert!(output.contains("Street: 2 Hải Triều"));
        assert!(output.contains("Country: Việt Nam (VN)"));
        assert!(!output.contains("Zipcode"));
    }

    #[test]
    fn test_text_geocode_failure() {
        let response = GeocodeResponse::provider_failure(&ProviderStatus::ZeroResults, "ZERO_RESULTS");
        let output = TextFormatter
            .format_geocode(&response, &Config::default())
            .unwrap();

        assert!(output.starts_with("Geocoding failed:"));
        assert!(output.contains("ZERO_RESULTS"));

        let response = GeocodeResponse::failure(GeocodeFailure::Input, "Address is required");
        let output = TextFormatter
            .format_geocode(&response, &Config::default())
            .unwrap();
        assert!(output.contains("Address is required"));
        assert!(!output.contains("Provider status"));
    }

    #[test]
    fn test_text_validation() {
        let coords = Coordinates::new(21.0285, 105.8542);
        let result = validate_vietnam_coordinates(coords.lat, coords.lng, Some("Sài Gòn"));
        let output = TextFormatter
            .format_validation(coords, &result, &Config::default())
            .unwrap();

        assert!(output.contains("Coordinates: 21.028500, 105.854200"));
        assert!(output.contains("Status: CHECK"));
        assert!(output.contains("Nearest city: Hà Nội (0.0 km)"));
        assert!(output.contains("Warnings:"));
        assert!(output.contains("Suggestions:"));
    }

    #[test]
    fn test_text_formatter_info() {
        assert_eq!(TextFormatter.name(), "text");
        assert!(!TextFormatter.description().is_empty());
    }
}
