//! Validate and distance command handlers
//!
//! Both run offline.

use crate::config::Config;
use crate::coord::{calculate_distance, parse_coordinate_string, Coordinates};
use crate::error::{Error, Result};
use crate::format::get_formatter;
use crate::validate::validate_vietnam_coordinates;
use clap::Args;

/// Validate command arguments
#[derive(Args)]
pub struct ValidateArgs {
    /// Latitude
    #[arg(allow_negative_numbers = true, requires = "lng")]
    pub lat: Option<f64>,

    /// Longitude
    #[arg(allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Coordinates as one string, e.g. "10.7626,106.6601"
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    pub coords: Option<String>,

    /// Address the coordinates are supposed to belong to
    #[arg(long, short = 'a')]
    pub address: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Distance command arguments
#[derive(Args)]
pub struct DistanceArgs {
    #[arg(allow_negative_numbers = true)]
    pub lat1: f64,
    #[arg(allow_negative_numbers = true)]
    pub lng1: f64,
    #[arg(allow_negative_numbers = true)]
    pub lat2: f64,
    #[arg(allow_negative_numbers = true)]
    pub lng2: f64,
}

/// Resolve the coordinates from either the positional pair or `--coords`
fn coordinates_from(args: &ValidateArgs) -> Result<Coordinates> {
    if let Some(text) = &args.coords {
        return parse_coordinate_string(text).ok_or_else(|| {
            Error::InvalidCoordinates(format!("Could not parse coordinates from '{}'", text))
        });
    }

    match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => Ok(Coordinates::new(lat, lng)),
        _ => Err(Error::InvalidCoordinates(
            "No coordinates specified. Use <LAT> <LNG> or --coords".to_string(),
        )),
    }
}

/// Run the validate command
pub fn run_validate(args: ValidateArgs) -> Result<()> {
    let config = Config::load()?;
    let coords = coordinates_from(&args)?;

    let format = args.format.unwrap_or_else(|| config.output.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

    let result = validate_vietnam_coordinates(coords.lat, coords.lng, args.address.as_deref());
    println!("{}", formatter.format_validation(coords, &result, &config)?);

    if !result.is_valid() {
        std::process::exit(2);
    }

    Ok(())
}

/// Run the distance command
pub fn run_distance(args: DistanceArgs) -> Result<()> {
    let meters = calculate_distance(args.lat1, args.lng1, args.lat2, args.lng2);
    println!("{:.1} m ({:.3} km)", meters, meters / 1000.0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(lat: Option<f64>, lng: Option<f64>, coords: Option<&str>) -> ValidateArgs {
        ValidateArgs {
            lat,
            lng,
            coords: coords.map(str::to_string),
            address: None,
            format: None,
        }
    }

    #[test]
    fn test_coordinates_from_positionals() {
        let coords = coordinates_from(&args(Some(10.5), Some(106.7), None)).unwrap();
        assert_eq!(coords, Coordinates::new(10.5, 106.7));
    }

    #[test]
    fn test_coordinates_from_string() {
        let coords = coordinates_from(&args(None, None, Some("21.0285; 105.8542"))).unwrap();
        assert_eq!(coords, Coordinates::new(21.0285, 105.8542));
    }

    #[test]
    fn test_coordinates_missing_or_unparseable() {
        assert!(coordinates_from(&args(None, None, None)).is_err());
        assert!(matches!(
            coordinates_from(&args(None, None, Some("somewhere"))),
            Err(Error::InvalidCoordinates(_))
        ));
    }
}
