//! Centralized constants for the vn-geocoder crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in meters
    pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

    /// Meters per degree used to turn a city tolerance into a distance
    pub const METERS_PER_DEGREE: f64 = 111_000.0;

    /// Digits after the decimal point beyond which a coordinate looks fabricated
    pub const MAX_DECIMAL_PLACES: usize = 8;
}

/// Vietnam bounding box (degrees, inclusive)
pub mod vietnam {
    pub const MIN_LAT: f64 = 8.5;
    pub const MAX_LAT: f64 = 23.5;
    pub const MIN_LNG: f64 = 102.0;
    pub const MAX_LNG: f64 = 110.0;
}

/// External API endpoints
pub mod api {
    /// Google Maps Geocoding API (JSON output)
    pub const GOOGLE_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

    /// User agent sent with every provider request
    pub const USER_AGENT: &str = concat!("vn-geocoder/", env!("CARGO_PKG_VERSION"));
}
