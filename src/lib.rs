//! vn-geocoder: Address Geocoding and Coordinate Checks
//!
//! A library and CLI tool that turns free-text addresses into coordinates
//! through the Google Geocoding API and flags coordinates that are implausible
//! for a Vietnam-focused application.
//!
//! ## Features
//!
//! - Forward and reverse geocoding with provider-independent results
//! - Offline plausibility checks (bounding box, city proximity, axis swap)
//! - Coordinate string parsing and haversine distance
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use vn_geocoder::coord::{calculate_distance, parse_coordinate_string};
//! use vn_geocoder::validate::validate_vietnam_coordinates;
//!
//! let point = parse_coordinate_string("21.0285, 105.8542").unwrap();
//! let report = validate_vietnam_coordinates(point.lat, point.lng, Some("Hà Nội"));
//! assert!(report.is_valid());
//! assert_eq!(report.nearest_city(), Some("Hà Nội"));
//!
//! let meters = calculate_distance(point.lat, point.lng, 10.8231, 106.6297);
//! println!("Hanoi to Saigon: {:.0} km", meters / 1000.0);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod geo;
pub mod server;
pub mod validate;

// Re-export commonly used types
pub use config::Config;
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use geo::{GeoBackend, GeocodeResponse, GeocodeResult};
pub use validate::{validate_vietnam_coordinates, ValidationResult};
