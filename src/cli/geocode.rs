//! Geocode and reverse command handlers

use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::format::{get_formatter, OutputFormatter};
use crate::geo::{get_geocoder, GeoBackend, GeocodeResponse};
use crate::validate::validate_vietnam_coordinates;
use clap::Args;

/// Geocode command arguments
#[derive(Args)]
pub struct GeocodeArgs {
    /// Address to look up
    pub address: String,

    /// Also run the coordinate checks on every result
    #[arg(long)]
    pub validate: bool,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Reverse command arguments
#[derive(Args)]
pub struct ReverseArgs {
    /// Latitude
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude
    #[arg(allow_negative_numbers = true)]
    pub lng: f64,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

fn load_config() -> Result<Config> {
    let mut config = Config::load()?;
    config.apply_env();
    Ok(config)
}

fn formatter_for(name: Option<String>, config: &Config) -> Result<Box<dyn OutputFormatter>> {
    let name = name.unwrap_or_else(|| config.output.format.clone());
    get_formatter(&name).ok_or_else(|| Error::Config(format!("Unknown format: {}", name)))
}

/// Print the response and exit non-zero when it failed
///
/// Failures go to stderr in the selected format.
fn finish(
    response: &GeocodeResponse,
    formatter: &dyn OutputFormatter,
    config: &Config,
) -> Result<()> {
    let output = formatter.format_geocode(response, config)?;

    if !response.success {
        eprintln!("{}", output.trim_end());
        std::process::exit(1);
    }

    println!("{}", output);
    Ok(())
}

/// Run the geocode command
pub async fn run_geocode(args: GeocodeArgs) -> Result<()> {
    let config = load_config()?;
    let formatter = formatter_for(args.format, &config)?;
    let geocoder = get_geocoder(&config.geocoder)?;

    let response = geocoder.geocode(&args.address).await;
    finish(&response, formatter.as_ref(), &config)?;

    if args.validate {
        for result in &response.results {
            let coords = Coordinates::new(result.latitude, result.longitude);
            let validation =
                validate_vietnam_coordinates(coords.lat, coords.lng, Some(&args.address));
            println!("{}", formatter.format_validation(coords, &validation, &config)?);
        }
    }

    Ok(())
}

/// Run the reverse command
pub async fn run_reverse(args: ReverseArgs) -> Result<()> {
    let config = load_config()?;
    let formatter = formatter_for(args.format, &config)?;
    let geocoder = get_geocoder(&config.geocoder)?;

    let response = geocoder.reverse(args.lat, args.lng).await;
    finish(&response, formatter.as_ref(), &config)
}
