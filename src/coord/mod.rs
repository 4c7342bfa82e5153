//! Coordinate helpers
//!
//! This module handles:
//! - The `Coordinates` value type
//! - Rendering and parsing "lat, lng" strings
//! - Great-circle distance (see [`distance`])

pub mod distance;

pub use distance::calculate_distance;

use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_coordinates(self.lat, self.lng))
    }
}

/// Render a coordinate pair as `"{lat:.6}, {lng:.6}"`
pub fn format_coordinates(lat: f64, lng: f64) -> String {
    format!("{:.6}, {:.6}", lat, lng)
}

/// True iff `value` is finite and not exactly zero
///
/// Zero is rejected on either axis: for this application a zero coordinate
/// always means "never filled in".
pub fn is_valid_coordinate(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

/// Parse `"lat,lng"` or `"lat lng"` into coordinates
///
/// Semicolons are treated as commas. Returns `None` when the text matches
/// neither form or either value fails [`is_valid_coordinate`].
pub fn parse_coordinate_string(text: &str) -> Option<Coordinates> {
    let normalized = text.trim().replace(';', ",");

    let (lat, lng) = match normalized.split_once(',') {
        Some((lat, lng)) => (lat.trim(), lng.trim()),
        None => {
            let mut parts = normalized.split_whitespace();
            let pair = (parts.next()?, parts.next()?);
            if parts.next().is_some() {
                return None;
            }
            pair
        }
    };

    let lat = parse_decimal(lat)?;
    let lng = parse_decimal(lng)?;

    if is_valid_coordinate(lat) && is_valid_coordinate(lng) {
        Some(Coordinates::new(lat, lng))
    } else {
        None
    }
}

/// Plain decimal: optional '-', digits, optional '.' and more digits
fn parse_decimal(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    text.parse().ok()
}
