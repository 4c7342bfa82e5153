//! JSON output formatter

use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::geo::GeocodeResponse;
use crate::validate::ValidationResult;
use serde_json::json;

/// JSON formatter - outputs full results as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON response"
    }

    fn format_geocode(&self, response: &GeocodeResponse, _config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(response)?)
    }

    fn format_validation(
        &self,
        coords: Coordinates,
        result: &ValidationResult,
        _config: &Config,
    ) -> Result<String> {
        let report = json!({
            "lat": coords.lat,
            "lng": coords.lng,
            "validation": result,
        });
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::sample_response;
    use crate::validate::validate_vietnam_coordinates;

    #[test]
    fn test_json_geocode() {
        let output = JsonFormatter
            .format_geocode(&sample_response(), &Config::default())
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["results"][0]["latitude"], 10.7717);
        assert_eq!(parsed["results"][0]["country_code"], "VN");
    }

    #[test]
    fn test_json_validation() {
        let coords = Coordinates::new(0.0, 0.0);
        let result = validate_vietnam_coordinates(coords.lat, coords.lng, None);
        let output = JsonFormatter
            .format_validation(coords, &result, &Config::default())
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["validation"]["is_valid"], false);
        assert_eq!(parsed["validation"]["warnings"].as_array().unwrap().len(), 2);
    }
}
