//! Coordinate plausibility checks for Vietnam
//!
//! Pure and infallible: every check runs on every call and appends to the
//! warning and suggestion lists independently. The two lists are not paired
//! index by index.

pub mod cities;

use crate::constants::geo::{MAX_DECIMAL_PLACES, METERS_PER_DEGREE};
use crate::constants::vietnam;
use crate::coord::calculate_distance;
use cities::REFERENCE_CITIES;
use serde::Serialize;

/// Outcome of [`validate_vietnam_coordinates`]
///
/// `is_valid` is derived from `warnings` at construction and cannot be set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    warnings: Vec<String>,
    suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nearest_city: Option<String>,
    /// Meters from `nearest_city`'s center
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_from_city: Option<f64>,
}

impl ValidationResult {
    fn new(
        warnings: Vec<String>,
        suggestions: Vec<String>,
        nearest: Option<(String, f64)>,
    ) -> Self {
        let (nearest_city, distance_from_city) = match nearest {
            Some((name, distance)) => (Some(name), Some(distance)),
            None => (None, None),
        };

        Self {
            is_valid: warnings.is_empty(),
            warnings,
            suggestions,
            nearest_city,
            distance_from_city,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn nearest_city(&self) -> Option<&str> {
        self.nearest_city.as_deref()
    }

    pub fn distance_from_city(&self) -> Option<f64> {
        self.distance_from_city
    }
}

/// Run every plausibility check on a coordinate pair
///
/// # Arguments
/// * `lat`, `lng` - Coordinates to check, in degrees
/// * `address` - Optional address text; enables the city-proximity check and
///   the nearest-city report
pub fn validate_vietnam_coordinates(lat: f64, lng: f64, address: Option<&str>) -> ValidationResult {
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    if !(vietnam::MIN_LAT..=vietnam::MAX_LAT).contains(&lat)
        || !(vietnam::MIN_LNG..=vietnam::MAX_LNG).contains(&lng)
    {
        warnings.push(format!("Coordinates ({}, {}) are outside Vietnam", lat, lng));
        suggestions.push(
            "Double-check the address, or enter the coordinates manually".to_string(),
        );
    }

    let nearest = match address.filter(|a| !a.is_empty()) {
        Some(address) => check_city_proximity(lat, lng, address, &mut warnings, &mut suggestions),
        None => None,
    };

    if lat == 0.0 && lng == 0.0 {
        warnings.push("(0, 0) is not a valid coordinate (null island)".to_string());
        suggestions.push(
            "Geocode the address again, or enter the coordinates manually".to_string(),
        );
    }

    if lng < 100.0 && lat > 100.0 {
        warnings.push("Latitude and longitude may be swapped".to_string());
        suggestions.push("Check that latitude is entered before longitude".to_string());
    }

    if decimal_places(lat) > MAX_DECIMAL_PLACES || decimal_places(lng) > MAX_DECIMAL_PLACES {
        warnings.push(format!(
            "Coordinate precision is suspiciously high (more than {} decimal places)",
            MAX_DECIMAL_PLACES
        ));
    }

    ValidationResult::new(warnings, suggestions, nearest)
}

/// Warn for every mentioned city the point is far from; return the closest city
fn check_city_proximity(
    lat: f64,
    lng: f64,
    address: &str,
    warnings: &mut Vec<String>,
    suggestions: &mut Vec<String>,
) -> Option<(String, f64)> {
    let address_lower = address.to_lowercase();
    let mut nearest: Option<(String, f64)> = None;

    for city in &REFERENCE_CITIES {
        let distance = calculate_distance(lat, lng, city.lat, city.lng);

        if city.is_mentioned_in(&address_lower) {
            let max_distance = city.tolerance_degrees * METERS_PER_DEGREE;
            if distance > max_distance {
                warnings.push(format!(
                    "Coordinates are {:.1} km from the center of {}",
                    distance / 1000.0,
                    city.name
                ));
                suggestions.push(format!(
                    "Check that the address is really in {}",
                    city.name
                ));
            }
        }

        let closer = match &nearest {
            Some((_, best)) => distance < *best,
            None => !distance.is_nan(),
        };
        if closer {
            nearest = Some((city.name.to_string(), distance));
        }
    }

    nearest
}

/// Characters after the decimal point in the shortest round-trip rendering
///
/// Magnitudes below 1e-6 or from 1e21 up render in exponent form (`1.5e-9`),
/// so a tiny value is not mistaken for a long fraction.
fn decimal_places(value: f64) -> usize {
    let magnitude = value.abs();
    let rendered = if value != 0.0 && (magnitude < 1e-6 || magnitude >= 1e21) {
        format!("{:e}", value)
    } else {
        value.to_string()
    };

    rendered
        .split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hanoi_center_is_valid() {
        let result = validate_vietnam_coordinates(21.0285, 105.8542, Some("Hanoi, Vietnam"));

        assert!(result.is_valid(), "warnings: {:?}", result.warnings());
        assert!(result.warnings().is_empty());
        assert_eq!(result.nearest_city(), Some("Hà Nội"));
        assert!(result.distance_from_city().unwrap() < 1.0);
    }

    #[test]
    fn test_no_address_means_no_nearest_city() {
        let result = validate_vietnam_coordinates(10.7717, 106.7041, None);
        assert!(result.is_valid());
        assert!(result.nearest_city().is_none());
        assert!(result.distance_from_city().is_none());
    }

    #[test]
    fn test_null_island() {
        let result = validate_vietnam_coordinates(0.0, 0.0, None);

        assert!(!result.is_valid());
        assert!(result.warnings().iter().any(|w| w.contains("(0, 0)")));
        // Also outside the bounding box; checks do not short-circuit
        assert!(result.warnings().iter().any(|w| w.contains("outside Vietnam")));
        assert_eq!(result.warnings().len(), 2);
    }

    #[test]
    fn test_axis_swap() {
        let result = validate_vietnam_coordinates(150.0, 10.0, None);

        assert!(!result.is_valid());
        assert!(result.warnings().iter().any(|w| w.contains("swapped")));
    }

    #[test]
    fn test_outside_bounding_box() {
        let result = validate_vietnam_coordinates(40.7128, -74.0060, None);
        assert!(!result.is_valid());
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].contains("outside Vietnam"));
        assert_eq!(result.suggestions().len(), 1);
    }

    #[test]
    fn test_bounding_box_edges_are_inclusive() {
        assert!(validate_vietnam_coordinates(8.5, 102.0, None).is_valid());
        assert!(validate_vietnam_coordinates(23.5, 110.0, None).is_valid());
        assert!(!validate_vietnam_coordinates(8.49, 105.0, None).is_valid());
    }

    #[test]
    fn test_far_from_mentioned_city() {
        // Hanoi's center, but the address says Saigon
        let result =
            validate_vietnam_coordinates(21.0285, 105.8542, Some("Quận 1, Sài Gòn"));

        assert!(!result.is_valid());
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].contains("Hồ Chí Minh"));
        assert!(result.warnings()[0].contains("km"));
        assert_eq!(result.nearest_city(), Some("Hà Nội"));
    }

    #[test]
    fn test_within_city_tolerance() {
        // ~11 km from the Ho Chi Minh City center, tolerance is 55.5 km
        let result = validate_vietnam_coordinates(10.7717, 106.7041, Some("Quận 1, TP. HCM"));
        assert!(result.is_valid(), "warnings: {:?}", result.warnings());
        assert_eq!(result.nearest_city(), Some("Hồ Chí Minh"));
    }

    #[test]
    fn test_da_nang_tighter_tolerance() {
        // 0.4 degrees north of Da Nang: inside 0.5 but outside 0.3
        let result = validate_vietnam_coordinates(16.4544, 108.2022, Some("Đà Nẵng"));
        assert!(!result.is_valid());
        assert!(result.warnings()[0].contains("Đà Nẵng"));
    }

    #[test]
    fn test_unmentioned_city_still_reports_nearest() {
        let result = validate_vietnam_coordinates(20.85, 106.69, Some("Some warehouse"));
        assert!(result.is_valid());
        assert_eq!(result.nearest_city(), Some("Hải Phòng"));
    }

    #[test]
    fn test_high_precision_warning() {
        let result = validate_vietnam_coordinates(10.123456789, 106.7, None);
        assert!(!result.is_valid());
        assert!(result.warnings()[0].contains("precision"));

        let result = validate_vietnam_coordinates(10.12345678, 106.7, None);
        assert!(result.is_valid());
    }

    #[test]
    fn test_nan_fails_bounding_box() {
        let result = validate_vietnam_coordinates(f64::NAN, f64::NAN, Some("Hà Nội"));
        assert!(!result.is_valid());
        assert!(result.warnings()[0].contains("outside Vietnam"));
        assert!(result.nearest_city().is_none());
    }

    #[test]
    fn test_is_valid_tracks_warnings() {
        let cases = [
            (21.0285, 105.8542, None),
            (0.0, 0.0, Some("Hà Nội")),
            (150.0, 10.0, Some("hcm")),
            (10.0452, 105.7469, Some("Cần Thơ")),
        ];
        for (lat, lng, address) in cases {
            let result = validate_vietnam_coordinates(lat, lng, address);
            assert_eq!(result.is_valid(), result.warnings().is_empty());
        }
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(decimal_places(10.0), 0);
        assert_eq!(decimal_places(10.5), 1);
        assert_eq!(decimal_places(106.660172), 6);
        assert_eq!(decimal_places(f64::NAN), 0);
    }

    #[test]
    fn test_serialization() {
        let result = validate_vietnam_coordinates(21.0285, 105.8542, Some("Hà Nội"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["is_valid"], true);
        assert_eq!(json["nearest_city"], "Hà Nội");
        assert!(json["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_tiny_values_use_exponent_form() {
        assert_eq!(decimal_places(1e-9), 0);
        assert_eq!(decimal_places(1.5e-9), 4);
        assert_eq!(decimal_places(0.000001), 6);
        assert_eq!(decimal_places(0.0), 0);

        let result = validate_vietnam_coordinates(1e-9, 106.7, None);
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].contains("outside Vietnam"));
    }
}
