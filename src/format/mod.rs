//! Output formatters
//!
//! Provides trait-based output formatting for geocode and validation results.

pub mod json;
pub mod text;
pub mod url;

use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::Result;
use crate::geo::GeocodeResponse;
use crate::validate::ValidationResult;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a geocode or reverse-geocode response
    fn format_geocode(&self, response: &GeocodeResponse, config: &Config) -> Result<String>;

    /// Format the validation of one coordinate pair
    fn format_validation(
        &self,
        coords: Coordinates,
        result: &ValidationResult,
        config: &Config,
    ) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "url" => Some(Box::new(url::UrlFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "json".to_string(),
            description: "Full JSON response".to_string(),
        },
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable text".to_string(),
        },
        FormatInfo {
            name: "url".to_string(),
            description: "Map URL for the best match".to_string(),
        },
    ]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("url").is_some());
        assert!(get_formatter("gpx").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("JSON").is_some());
        assert!(get_formatter("Text").is_some());
    }

    #[test]
    fn test_available_formats_match_registry() {
        let formats = available_formats();
        assert_eq!(formats.len(), 3);
        for info in formats {
            let formatter = get_formatter(&info.name).unwrap();
            assert_eq!(formatter.name(), info.name);
        }
    }
}
