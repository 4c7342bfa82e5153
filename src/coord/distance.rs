//! Great-circle distance

use crate::constants::geo::EARTH_RADIUS_METERS;
use std::f64::consts::PI;

/// Calculate the distance between two points in meters (Haversine formula)
///
/// # Arguments
/// * `lat1`, `lng1` - First point in degrees
/// * `lat2`, `lng2` - Second point in degrees
///
/// # Returns
/// Distance in meters on a sphere of radius 6,371 km
pub fn calculate_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1 * PI / 180.0;
    let phi2 = lat2 * PI / 180.0;
    let delta_lat = (lat2 - lat1) * PI / 180.0;
    let delta_lng = (lng2 - lng1) * PI / 180.0;

    let a = (delta_lat / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}
